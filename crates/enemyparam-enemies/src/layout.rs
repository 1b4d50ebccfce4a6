//! Enemy table layout.
//!
//! Offsets were recovered by hand from the game's data files. Bytes inside a
//! record that are not listed here are not interpreted.

/// Number of records in the table.
pub const ENEMY_COUNT: u32 = 935;

/// Absolute offset of the first record.
pub const ENEMY_BASE_OFFSET: usize = 0xA2AB;

/// Size of a single record in bytes.
pub const ENEMY_ENTRY_SIZE: usize = 0x448;

// Field offsets relative to the start of a record
pub const REL_ID_OFFSET: usize = 0x000;
pub const REL_SPIRIT_OFFSET: usize = 0x008;
pub const REL_HP_OFFSET: usize = 0x00C;
pub const REL_MAGIC_OFFSET: usize = 0x010;
pub const REL_ATTACK_OFFSET: usize = 0x01C;
pub const REL_EXP_OFFSET: usize = 0x020;
pub const REL_SPEED1_OFFSET: usize = 0x178;
pub const REL_SPEED2_OFFSET: usize = 0x17C;
pub const REL_SPEED3_OFFSET: usize = 0x180;
pub const REL_DEF_OFFSET: usize = 0x1F4;
pub const REL_POISE_OFFSET: usize = 0x3F4;

/// Absolute offset of the record at `index`, or `None` on overflow.
#[inline]
pub fn record_offset(index: u32) -> Option<usize> {
    usize::try_from(index)
        .ok()?
        .checked_mul(ENEMY_ENTRY_SIZE)?
        .checked_add(ENEMY_BASE_OFFSET)
}

/// Number of whole records a file of `file_len` bytes can hold.
#[inline]
pub const fn record_capacity(file_len: usize) -> usize {
    file_len.saturating_sub(ENEMY_BASE_OFFSET) / ENEMY_ENTRY_SIZE
}
