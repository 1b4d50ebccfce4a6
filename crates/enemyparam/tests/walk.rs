use std::fs;
use std::path::Path;

use enemyparam::common::IntoBytes;
use enemyparam::enemies::layout::{
    ENEMY_BASE_OFFSET, ENEMY_COUNT, ENEMY_ENTRY_SIZE, REL_ATTACK_OFFSET, REL_HP_OFFSET,
    REL_ID_OFFSET, REL_POISE_OFFSET,
};
use enemyparam::names::{NameTableEntry, NAMES_START_OFFSET, STRING_OFFSET_ADDITION};
use enemyparam::prelude::*;

fn put(data: &mut [u8], at: usize, bytes: [u8; 4]) {
    data[at..at + 4].copy_from_slice(&bytes);
}

/// Enemies file with the given IDs; unlisted indices get `2000 + index`.
fn write_enemies(path: &Path, ids: &[(usize, u32)]) {
    let count = ENEMY_COUNT as usize;
    let mut data = vec![0u8; ENEMY_BASE_OFFSET + count * ENEMY_ENTRY_SIZE];

    for index in 0..count {
        let start = ENEMY_BASE_OFFSET + index * ENEMY_ENTRY_SIZE;
        let id = ids
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, id)| *id)
            .unwrap_or(2000 + index as u32);
        put(&mut data, start + REL_ID_OFFSET, id.to_le_bytes());
    }

    let first = ENEMY_BASE_OFFSET;
    put(&mut data, first + REL_HP_OFFSET, 0x0000_0064i32.to_le_bytes());
    put(&mut data, first + REL_ATTACK_OFFSET, 0x0000_000Ai32.to_le_bytes());
    put(&mut data, first + REL_POISE_OFFSET, 1.5f32.to_le_bytes());

    fs::write(path, data).unwrap();
}

fn write_names(path: &Path, names: &[(u32, &str)]) {
    let pool_start = NAMES_START_OFFSET + names.len() * 8;
    let mut data = vec![0u8; NAMES_START_OFFSET];
    let mut pool = Vec::new();

    for (id, name) in names {
        let string_offset = (pool_start + pool.len() - STRING_OFFSET_ADDITION) as u32;
        data.extend_from_slice(NameTableEntry::new(*id, string_offset).as_bytes());
        pool.extend_from_slice(name.as_bytes());
        pool.push(0);
    }
    data.extend_from_slice(&pool);

    fs::write(path, data).unwrap();
}

#[test]
fn test_full_walk() {
    let dir = tempfile::tempdir().unwrap();
    let enemies_path = dir.path().join("enemies.bin");
    let names_path = dir.path().join("enemy_names.bin");
    let journal_path = dir.path().join("unknown_enemy_ids.txt");

    write_enemies(&enemies_path, &[(0, 1), (1, 999), (2, 999), (3, 42)]);
    write_names(&names_path, &[(1, "Test Foe"), (42, "3-headed dog!")]);
    fs::write(&journal_path, "# unknown ids\n2010\n").unwrap();

    let names = NameTable::open(&names_path).unwrap();
    let mut journal = UnknownIdJournal::open(&journal_path).unwrap();
    let file = EnemyFile::open(&enemies_path).unwrap();
    let mut reader = EnemyReader::new(file, &names, &mut journal);

    let first = reader.read(0).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.hp, 100);
    assert_eq!(first.attack, 10);
    assert_eq!(first.poise, 1.5);

    let mut out = Vec::new();
    let summary = export_param_table(&mut reader, &mut out, |_, _| {}).unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), ENEMY_COUNT as usize);
    assert_eq!(lines[0], "ParamTable_Element Test_Foe;");
    assert_eq!(lines[1], "ParamTable_Element _unknown;");
    assert_eq!(lines[2], "ParamTable_Element _unknown;");
    assert_eq!(lines[3], "ParamTable_Element _3headed_dog;");
    assert!(lines.iter().all(|l| l.starts_with("ParamTable_Element ") && l.ends_with(';')));

    assert_eq!(summary.written, ENEMY_COUNT as usize);
    assert_eq!(summary.resolved, 2);
    assert_eq!(summary.unknown, ENEMY_COUNT as usize - 2);
    // 999 once, 2004..2934 except the pre-journaled 2010
    assert_eq!(summary.newly_journaled, 1 + (ENEMY_COUNT as usize - 4) - 1);

    let journal_text = fs::read_to_string(&journal_path).unwrap();
    assert!(journal_text.starts_with("# unknown ids\n2010\n\n999\n2004\n"));
    assert_eq!(journal_text.lines().filter(|l| *l == "999").count(), 1);
    assert_eq!(journal_text.lines().filter(|l| *l == "2010").count(), 1);
}

#[test]
fn test_missing_inputs() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        NameTable::open(dir.path().join("enemy_names.bin")),
        Err(enemyparam::names::Error::MissingFile { .. })
    ));
    assert!(matches!(
        UnknownIdJournal::open(dir.path().join("unknown_enemy_ids.txt")),
        Err(enemyparam::enemies::Error::MissingFile { .. })
    ));
    assert!(matches!(
        EnemyFile::open(dir.path().join("enemies.bin")),
        Err(enemyparam::enemies::Error::MissingFile { .. })
    ));
}
