//! Enemy record model.

use std::fmt;

use enemyparam_common::{read_f32_le, read_i32_le, read_u32_le, Result};

use crate::layout::*;

/// Stats decoded from a single record, before name resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyRecord {
    pub id: u32,
    pub spirit: i32,
    pub hp: i32,
    pub magic: i32,
    pub attack: i32,
    pub defense: i32,
    pub exp: i32,
    pub speed1: f32,
    pub speed2: f32,
    pub speed3: f32,
    pub poise: f32,
}

impl EnemyRecord {
    /// Decode a record from its bytes.
    ///
    /// `bytes` starts at the record's first byte; anything past the last
    /// known field is ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            id: read_u32_le(bytes, REL_ID_OFFSET)?,
            spirit: read_i32_le(bytes, REL_SPIRIT_OFFSET)?,
            hp: read_i32_le(bytes, REL_HP_OFFSET)?,
            magic: read_i32_le(bytes, REL_MAGIC_OFFSET)?,
            attack: read_i32_le(bytes, REL_ATTACK_OFFSET)?,
            defense: read_i32_le(bytes, REL_DEF_OFFSET)?,
            exp: read_i32_le(bytes, REL_EXP_OFFSET)?,
            speed1: read_f32_le(bytes, REL_SPEED1_OFFSET)?,
            speed2: read_f32_le(bytes, REL_SPEED2_OFFSET)?,
            speed3: read_f32_le(bytes, REL_SPEED3_OFFSET)?,
            poise: read_f32_le(bytes, REL_POISE_OFFSET)?,
        })
    }

    /// Attach a resolved name.
    pub fn with_name(self, name: impl Into<String>) -> Enemy {
        Enemy {
            id: self.id,
            name: name.into(),
            spirit: self.spirit,
            hp: self.hp,
            magic: self.magic,
            attack: self.attack,
            defense: self.defense,
            exp: self.exp,
            speed1: self.speed1,
            speed2: self.speed2,
            speed3: self.speed3,
            poise: self.poise,
        }
    }
}

/// A fully read enemy: decoded stats plus its sanitized name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Enemy {
    pub id: u32,
    pub name: String,
    pub spirit: i32,
    pub hp: i32,
    pub magic: i32,
    pub attack: i32,
    pub defense: i32,
    pub exp: i32,
    pub speed1: f32,
    pub speed2: f32,
    pub speed3: f32,
    pub poise: f32,
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enemy{{id={}, name='{}', hp={}, attack={}, defense={}, exp={}}}",
            self.id, self.name, self.hp, self.attack, self.defense, self.exp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(bytes: &mut [u8], offset: usize, value: [u8; 4]) {
        bytes[offset..offset + 4].copy_from_slice(&value);
    }

    #[test]
    fn test_decode_fields() {
        let mut bytes = vec![0u8; ENEMY_ENTRY_SIZE];
        put(&mut bytes, REL_ID_OFFSET, 0x8000_0001u32.to_le_bytes());
        put(&mut bytes, REL_SPIRIT_OFFSET, 7i32.to_le_bytes());
        put(&mut bytes, REL_HP_OFFSET, 100i32.to_le_bytes());
        put(&mut bytes, REL_MAGIC_OFFSET, (-3i32).to_le_bytes());
        put(&mut bytes, REL_ATTACK_OFFSET, 10i32.to_le_bytes());
        put(&mut bytes, REL_EXP_OFFSET, 250i32.to_le_bytes());
        put(&mut bytes, REL_SPEED1_OFFSET, 1.0f32.to_le_bytes());
        put(&mut bytes, REL_SPEED2_OFFSET, 2.0f32.to_le_bytes());
        put(&mut bytes, REL_SPEED3_OFFSET, 0.5f32.to_le_bytes());
        put(&mut bytes, REL_DEF_OFFSET, 42i32.to_le_bytes());
        put(&mut bytes, REL_POISE_OFFSET, 1.5f32.to_le_bytes());

        let record = EnemyRecord::decode(&bytes).unwrap();
        assert_eq!(
            record,
            EnemyRecord {
                id: 0x8000_0001,
                spirit: 7,
                hp: 100,
                magic: -3,
                attack: 10,
                defense: 42,
                exp: 250,
                speed1: 1.0,
                speed2: 2.0,
                speed3: 0.5,
                poise: 1.5,
            }
        );
    }

    #[test]
    fn test_decode_truncated_record() {
        let bytes = vec![0u8; REL_POISE_OFFSET + 3];
        assert!(EnemyRecord::decode(&bytes).is_err());
    }

    #[test]
    fn test_display() {
        let enemy = EnemyRecord::decode(&[0u8; ENEMY_ENTRY_SIZE])
            .unwrap()
            .with_name("Garula");
        assert_eq!(
            enemy.to_string(),
            "Enemy{id=0, name='Garula', hp=0, attack=0, defense=0, exp=0}"
        );
    }
}
