//! Tests for ListStore
//!
//! These tests verify:
//! - Overwrite/append writes
//! - Cell coercion on read (int → float → text)
//! - Index lookups and out-of-range handling
//! - Missing-file tolerance
//! - Clear and count
//! - CSV quoting and line endings

use std::fs;
use std::path::PathBuf;

use recordstash::{Cell, LineEnding, ListStore, StashConfig};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_table() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("table.csv");
    (temp_dir, path)
}

fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

// =============================================================================
// Basic Writing Tests
// =============================================================================

#[test]
fn test_save_and_read_first_row() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    let row = vec![Cell::from(1), Cell::from(2.5), Cell::from("apple")];
    store.save(&path, &row, true).unwrap();

    assert_eq!(store.read_at(&path, 0), Some(row));
}

#[test]
fn test_numeric_text_is_coerced() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    let row = vec![Cell::from("42"), Cell::from("3.5"), Cell::from("4x")];
    store.save(&path, &row, true).unwrap();

    assert_eq!(
        store.read_at(&path, 0),
        Some(vec![Cell::Int(42), Cell::Float(3.5), text("4x")])
    );
}

#[test]
fn test_whole_float_reads_back_as_float() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.save(&path, &[Cell::from(1.0), Cell::from(-0.0)], true).unwrap();

    let row = store.read_at(&path, 0).unwrap();
    assert_eq!(row[0], Cell::Float(1.0));
    assert!(matches!(row[1], Cell::Float(_)));
}

#[test]
fn test_append_keeps_previous_rows() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.save(&path, &[Cell::from(1)], false).unwrap();
    store.save(&path, &[Cell::from(2)], false).unwrap();
    store.save(&path, &[Cell::from(3)], false).unwrap();

    assert_eq!(
        store.read(&path),
        vec![vec![Cell::Int(1)], vec![Cell::Int(2)], vec![Cell::Int(3)]]
    );
}

#[test]
fn test_overwrite_replaces_rows() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.save(&path, &[Cell::from("a")], false).unwrap();
    store.save(&path, &[Cell::from("b")], false).unwrap();
    store.save(&path, &[Cell::from("c")], true).unwrap();

    assert_eq!(store.read(&path), vec![vec![text("c")]]);
}

#[test]
fn test_rows_of_different_widths() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.save(&path, &[Cell::from(1), Cell::from(2)], false).unwrap();
    store.save(&path, &[Cell::from("solo")], false).unwrap();

    let rows = store.read(&path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[1], vec![text("solo")]);
}

#[test]
fn test_empty_row_reads_back_as_one_empty_cell() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.save(&path, &[Cell::from(1)], false).unwrap();
    store.save(&path, &[], false).unwrap();
    store.save(&path, &[Cell::from(2)], false).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1\r\n\"\"\r\n2\r\n");
    assert_eq!(store.read_at(&path, 1), Some(vec![text("")]));
    assert_eq!(store.count(&path).unwrap(), 3);
}

#[test]
fn test_bool_cells_written_as_lowercase_text() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.save(&path, &[Cell::from(true), Cell::from(false)], true).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "true,false\r\n");
    assert_eq!(store.read_at(&path, 0), Some(vec![text("true"), text("false")]));
}

// =============================================================================
// Quoting Tests
// =============================================================================

#[test]
fn test_quoted_cells_round_trip() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    let row = vec![
        Cell::from("a,b"),
        Cell::from("say \"hi\""),
        Cell::from("line1\nline2"),
    ];
    store.save(&path, &row, true).unwrap();

    assert_eq!(store.read_at(&path, 0), Some(row));
    assert_eq!(store.count(&path).unwrap(), 1);
}

#[test]
fn test_file_layout_uses_crlf() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.save(&path, &[Cell::from(1), Cell::from("x,y")], true).unwrap();
    store.save(&path, &[Cell::from(2.5)], false).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "1,\"x,y\"\r\n2.5\r\n");
}

#[test]
fn test_custom_delimiter_and_lf() {
    let (_temp, path) = setup_temp_table();
    let config = StashConfig::builder()
        .csv_delimiter(b';')
        .csv_terminator(LineEnding::Lf)
        .build();
    let store = ListStore::with_config(config);

    store.save(&path, &[Cell::from(1), Cell::from("a,b")], true).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1;a,b\n");
    assert_eq!(store.read_at(&path, 0), Some(vec![Cell::Int(1), text("a,b")]));
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_read_missing_file_is_empty() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    assert!(store.read(&path).is_empty());
    assert_eq!(store.read_at(&path, 0), None);
    assert!(store.try_read(&path).unwrap().is_none());
}

#[test]
fn test_read_at_out_of_range() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.save(&path, &[Cell::from(1)], true).unwrap();

    assert!(store.read_at(&path, 0).is_some());
    assert_eq!(store.read_at(&path, 1), None);
    assert_eq!(store.read_at(&path, 100), None);
}

#[test]
fn test_read_directory_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = ListStore::new();

    assert!(store.read(temp_dir.path()).is_empty());
    assert!(store.try_read(temp_dir.path()).is_err());
}

#[test]
fn test_read_hand_written_file() {
    let (_temp, path) = setup_temp_table();
    fs::write(&path, "1, 2 ,three\n4.0,,\"5\"\n").unwrap();

    let rows = ListStore::new().read(&path);
    assert_eq!(
        rows,
        vec![
            vec![Cell::Int(1), Cell::Int(2), text("three")],
            vec![Cell::Float(4.0), text(""), Cell::Int(5)],
        ]
    );
}

// =============================================================================
// Clear/Count Tests
// =============================================================================

#[test]
fn test_count_after_appends() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    for i in 0..10 {
        store.save(&path, &[Cell::from(i), Cell::from("v")], false).unwrap();
    }

    assert_eq!(store.count(&path).unwrap(), 10);
}

#[test]
fn test_clear_then_count_is_zero() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.save(&path, &[Cell::from(1)], false).unwrap();
    store.save(&path, &[Cell::from(2)], false).unwrap();
    store.clear(&path).unwrap();

    assert_eq!(store.count(&path).unwrap(), 0);
    assert!(store.read(&path).is_empty());
}

#[test]
fn test_clear_creates_missing_file() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.clear(&path).unwrap();

    assert!(path.exists());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn test_count_missing_file_is_zero() {
    let (_temp, path) = setup_temp_table();

    assert_eq!(ListStore::new().count(&path).unwrap(), 0);
}

#[test]
fn test_append_after_clear() {
    let (_temp, path) = setup_temp_table();
    let store = ListStore::new();

    store.save(&path, &[Cell::from("old")], false).unwrap();
    store.clear(&path).unwrap();
    store.save(&path, &[Cell::from("new")], false).unwrap();

    assert_eq!(store.read(&path), vec![vec![text("new")]]);
}
