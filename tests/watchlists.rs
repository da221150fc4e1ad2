use std::fs;
use tickerboard::data::{load_symbols, parse_symbols, save_symbols, ListKind, Watchlists};

fn setup(watch: &str, focus: &str) -> (tempfile::TempDir, Watchlists) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("watch.txt"), watch).unwrap();
    fs::write(dir.path().join("focus.txt"), focus).unwrap();
    let lists = Watchlists::load(dir.path().join("watch.txt"), dir.path().join("focus.txt")).unwrap();
    (dir, lists)
}

fn read(dir: &tempfile::TempDir, name: &str) -> Vec<String> {
    load_symbols(dir.path().join(name)).unwrap()
}

#[test]
fn test_loader_drops_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.txt");
    fs::write(&path, "AAPL\n\nMSFT\n").unwrap();

    assert_eq!(load_symbols(&path).unwrap(), vec!["AAPL", "MSFT"]);
    assert_eq!(parse_symbols(""), Vec::<String>::new());
}

#[test]
fn test_save_writes_one_symbol_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.txt");

    save_symbols(&path, &["2330.TW".to_string(), "AAPL".to_string()]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "2330.TW\nAAPL");
}

#[test]
fn test_toggle_watch_to_focus() {
    let (dir, mut lists) = setup("2330.TW\nAAPL\n", "MSFT\n");

    let moved = lists.toggle("2330.TW").unwrap();

    assert_eq!(moved, Some(ListKind::Focus));
    assert_eq!(lists.watchlist(), ["AAPL"]);
    assert_eq!(lists.focus_list(), ["MSFT", "2330.TW"]);
    assert_eq!(read(&dir, "watch.txt"), vec!["AAPL"]);
    assert_eq!(read(&dir, "focus.txt"), vec!["MSFT", "2330.TW"]);
}

#[test]
fn test_toggle_focus_to_watch() {
    let (dir, mut lists) = setup("AAPL\n", "2330.TW\nMSFT\n");

    assert_eq!(lists.toggle("2330.TW").unwrap(), Some(ListKind::Watch));
    assert_eq!(read(&dir, "watch.txt"), vec!["AAPL", "2330.TW"]);
    assert_eq!(read(&dir, "focus.txt"), vec!["MSFT"]);
}

#[test]
fn test_toggle_twice_round_trips_membership() {
    let (dir, mut lists) = setup("2330.TW\n", "");

    lists.toggle("2330.TW").unwrap();
    lists.toggle("2330.TW").unwrap();

    assert_eq!(lists.contains("2330.TW"), Some(ListKind::Watch));
    assert_eq!(read(&dir, "watch.txt"), vec!["2330.TW"]);
    assert!(read(&dir, "focus.txt").is_empty());
}

#[test]
fn test_toggle_unknown_symbol_touches_nothing() {
    let (dir, mut lists) = setup("AAPL\n\n", "MSFT\n");

    assert_eq!(lists.toggle("NVDA").unwrap(), None);
    assert_eq!(fs::read_to_string(dir.path().join("watch.txt")).unwrap(), "AAPL\n\n");
}

#[test]
fn test_add_appends_and_persists() {
    let (dir, mut lists) = setup("AAPL\n", "MSFT\n");

    assert!(lists.add("  2330.TW ").unwrap());
    assert_eq!(read(&dir, "watch.txt"), vec!["AAPL", "2330.TW"]);
    assert_eq!(lists.all_symbols(), vec!["AAPL", "2330.TW", "MSFT"]);
}

#[test]
fn test_add_rejects_duplicates_and_blank() {
    let (dir, mut lists) = setup("AAPL\n", "MSFT\n");

    assert!(!lists.add("AAPL").unwrap());
    assert!(!lists.add("MSFT").unwrap());
    assert!(!lists.add("   ").unwrap());

    assert_eq!(fs::read_to_string(dir.path().join("watch.txt")).unwrap(), "AAPL\n");
    assert_eq!(lists.watchlist(), ["AAPL"]);
}

#[test]
fn test_load_enforces_exclusive_lists() {
    let (_dir, lists) = setup("AAPL\nMSFT\nAAPL\n", "MSFT\nTSLA\nTSLA\n");

    assert_eq!(lists.watchlist(), ["AAPL"]);
    assert_eq!(lists.focus_list(), ["MSFT", "TSLA"]);
}

#[test]
fn test_load_with_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut lists =
        Watchlists::load(dir.path().join("watch.txt"), dir.path().join("focus.txt")).unwrap();

    assert!(lists.all_symbols().is_empty());
    assert!(lists.add("AAPL").unwrap());
    assert_eq!(read(&dir, "watch.txt"), vec!["AAPL"]);
}
