//! CLI integration tests
//!
//! Run the built binary against a temporary data directory and check both
//! its output and the resulting database file.

use rusqlite::Connection;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_pnl-tracker");
    Command::new(cli_bin)
        .current_dir(dir)
        .arg("--data-dir")
        .arg(dir.join("data"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn category_count(dir: &Path) -> i64 {
    let conn = Connection::open(dir.join("data").join("WooCommercePnLTracker.sqlite")).unwrap();
    conn.query_row("SELECT COUNT(*) FROM expense_categories", [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn test_cli_init_seeds_categories() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["init"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("10 expense categories seeded"), "stdout: {}", stdout);
    assert_eq!(category_count(temp_dir.path()), 10);
    assert!(temp_dir
        .path()
        .join("data")
        .join("WooCommercePnLTracker.flags.json")
        .exists());
}

#[test]
fn test_cli_init_twice_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    assert_success(&run(temp_dir.path(), &["init"]));

    let output = run(temp_dir.path(), &["init"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("already initialized"));
    assert_eq!(category_count(temp_dir.path()), 10);
}

#[test]
fn test_cli_status_before_and_after_init() {
    let temp_dir = TempDir::new().unwrap();

    let before = run(temp_dir.path(), &["status"]);
    assert_success(&before);
    assert!(String::from_utf8_lossy(&before.stdout).contains("initialized: no"));

    assert_success(&run(temp_dir.path(), &["init"]));

    let after = run(temp_dir.path(), &["status"]);
    assert_success(&after);
    let stdout = String::from_utf8_lossy(&after.stdout);
    assert!(stdout.contains("initialized: yes"));
    assert!(stdout.contains("expense_categories"));
    assert!(stdout.contains("flag db_initialized = true"));
}

#[test]
fn test_cli_reset_requires_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    assert_success(&run(temp_dir.path(), &["init"]));

    let refused = run(temp_dir.path(), &["reset"]);
    assert!(!refused.status.success());
    assert!(String::from_utf8_lossy(&refused.stderr).contains("--yes"));

    let output = run(temp_dir.path(), &["reset", "--yes"]);
    assert_success(&output);
    assert_eq!(category_count(temp_dir.path()), 10);
}

#[test]
fn test_cli_recreate_leaves_tables_empty() {
    let temp_dir = TempDir::new().unwrap();
    assert_success(&run(temp_dir.path(), &["init"]));

    assert_success(&run(temp_dir.path(), &["recreate"]));
    assert_eq!(category_count(temp_dir.path()), 0);
}

#[test]
fn test_cli_categories_lists_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let uninitialized = run(temp_dir.path(), &["categories"]);
    assert!(!uninitialized.status.success());

    assert_success(&run(temp_dir.path(), &["init"]));
    let output = run(temp_dir.path(), &["categories"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["Rent", "Utilities", "Software", "Other"] {
        assert!(stdout.contains(name), "missing {} in {}", name, stdout);
    }
    assert_eq!(stdout.lines().count(), 10);
}

#[test]
fn test_cli_reads_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("pnl-tracker.toml"),
        "[store]\ndb_name = \"Staging\"\n\n[logging]\nprofile = \"production\"\n",
    )
    .unwrap();

    assert_success(&run(temp_dir.path(), &["init"]));
    assert!(temp_dir.path().join("data").join("Staging.sqlite").exists());
}

#[test]
fn test_cli_rejects_unknown_profile() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("pnl-tracker.toml"),
        "[logging]\nprofile = \"verbose\"\n",
    )
    .unwrap();

    let output = run(temp_dir.path(), &["status"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("verbose"));
}

#[test]
fn test_cli_init_repairs_corrupt_database() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("WooCommercePnLTracker.sqlite"), vec![0x42u8; 8192]).unwrap();

    let status = run(temp_dir.path(), &["status"]);
    assert_success(&status);
    assert!(String::from_utf8_lossy(&status.stdout).contains("initialized: no"));

    let output = run(temp_dir.path(), &["init"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Database recreated"));
    assert_eq!(category_count(temp_dir.path()), 10);
}
