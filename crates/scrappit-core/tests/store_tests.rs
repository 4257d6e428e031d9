use std::fs;

use chrono::NaiveDate;
use scrappit_core::store::{
    append_scrap_blocks, ensure_scrap_log, ensure_scrap_root, existing_scrap_log,
};
use scrappit_core::{AutoConfirm, DenyAll, Error, ScrapBlock, ScrapRootState};
use tempfile::tempdir;

fn cut_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
}

#[test]
fn test_ensure_scrap_root_creates_missing_tree() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("deep").join("scrap_tree");

    let state = ensure_scrap_root(&root, &AutoConfirm).unwrap();
    assert_eq!(state, ScrapRootState::Created);
    assert!(root.is_dir());

    // Second call sees the existing directory
    let state = ensure_scrap_root(&root, &AutoConfirm).unwrap();
    assert_eq!(state, ScrapRootState::Exists);
}

#[test]
fn test_ensure_scrap_root_decline_is_soft() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("declined_tree");

    let state = ensure_scrap_root(&root, &DenyAll).unwrap();
    assert_eq!(state, ScrapRootState::Declined);
    assert!(!root.exists(), "decline must not create anything");
}

#[test]
fn test_ensure_scrap_root_rejects_non_directory() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("not_a_dir");
    fs::write(&root, "plain file").unwrap();

    let err = ensure_scrap_root(&root, &AutoConfirm).unwrap_err();
    assert!(matches!(err, Error::ScrapRootNotADirectory(_)), "got {err:?}");
}

#[test]
fn test_new_scrap_log_has_banner_header() {
    let tmp = tempdir().unwrap();
    let mirrored = tmp.path().join("src").join("a.py");

    let log = ensure_scrap_log(&mirrored, "scrap", cut_date()).unwrap();
    assert_eq!(log, tmp.path().join("src").join("a.py.scrap"));

    let contents = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("# Scrap collection file created by scrappit"));
    assert_eq!(lines[0], "#".repeat(lines[1].len()));
    assert_eq!(lines[2], lines[0]);
}

#[test]
fn test_existing_log_is_returned_untouched() {
    let tmp = tempdir().unwrap();
    let mirrored = tmp.path().join("b.txt");
    let log = ensure_scrap_log(&mirrored, "scrap", cut_date()).unwrap();
    let original = fs::read_to_string(&log).unwrap();

    let again = ensure_scrap_log(&mirrored, "scrap", cut_date()).unwrap();
    assert_eq!(again, log);
    assert_eq!(fs::read_to_string(&log).unwrap(), original);
}

#[test]
fn test_existing_scrap_log_never_creates() {
    let tmp = tempdir().unwrap();
    let mirrored = tmp.path().join("c.txt");
    assert!(existing_scrap_log(&mirrored, "scrap").is_none());
    assert!(!tmp.path().join("c.txt.scrap").exists());

    ensure_scrap_log(&mirrored, "scrap", cut_date()).unwrap();
    assert!(existing_scrap_log(&mirrored, "scrap").is_some());
}

#[test]
fn test_block_rendering_shape() {
    let block = ScrapBlock::new("scrap_cut", cut_date(), "let x = 1;".to_string());
    let rendered = block.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], format!("#{}", "-".repeat(60)));
    assert_eq!(lines[1], "#scrap_cut: 02/01/2024");
    assert_eq!(lines[2], format!("#{}", "-".repeat("scrap_cut: 02/01/2024".len())));
    assert_eq!(lines[3], "let x = 1;");
    assert!(rendered.ends_with('\n'));
}

#[test]
fn test_append_keeps_order_and_single_header() {
    let tmp = tempdir().unwrap();
    let mirrored = tmp.path().join("d.txt");
    let log = ensure_scrap_log(&mirrored, "scrap", cut_date()).unwrap();

    let first = vec![
        ScrapBlock::new("scrap_cut", cut_date(), "foo".to_string()),
        ScrapBlock::new("scrap_cut", cut_date(), "bar".to_string()),
    ];
    append_scrap_blocks(&log, &first).unwrap();

    let second = vec![ScrapBlock::new("scrap_cut", cut_date(), "baz".to_string())];
    append_scrap_blocks(&log, &second).unwrap();

    let contents = fs::read_to_string(&log).unwrap();
    let banner_count = contents
        .lines()
        .filter(|l| l.contains("Scrap collection file created by"))
        .count();
    assert_eq!(banner_count, 1, "header must never be duplicated");

    let foo = contents.find("foo").unwrap();
    let bar = contents.find("bar").unwrap();
    let baz = contents.find("baz").unwrap();
    assert!(foo < bar && bar < baz, "blocks must keep arrival order");

    let delimiter_count = contents
        .lines()
        .filter(|l| *l == format!("#{}", "-".repeat(60)))
        .count();
    assert_eq!(delimiter_count, 3, "one delimiter rule per block");
}

#[test]
fn test_append_to_missing_log_is_io_error() {
    let tmp = tempdir().unwrap();
    let log = tmp.path().join("never_created.scrap");
    let blocks = vec![ScrapBlock::new("scrap_cut", cut_date(), "x".to_string())];
    let err = append_scrap_blocks(&log, &blocks).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "got {err:?}");
}
