//! End-to-end tests for the `purse` binary
//!
//! Each test runs against its own temporary data directory via the
//! `PURSE_CLI_DATA_DIR` override, so tests never touch real user data and can
//! run in parallel.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn purse_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("purse").unwrap();
    cmd.env("PURSE_CLI_DATA_DIR", dir.path());
    cmd
}

fn init(dir: &TempDir) {
    purse_cmd(dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded default purses"));
}

#[test]
fn init_seeds_and_lists_purses() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    purse_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Locked"))
        .stdout(predicate::str::contains("TOTAL"));
}

#[test]
fn init_twice_does_not_reseed() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    purse_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn transfer_moves_funds_and_records_history() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    purse_cmd(&dir)
        .args(["transfer", "Groceries", "Fun Money", "25.00", "--reason", "pizza night"])
        .assert()
        .success()
        .stdout(predicate::str::contains("now $425.00"))
        .stdout(predicate::str::contains("now $175.00"));

    purse_cmd(&dir)
        .args(["history", "Fun Money"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TRANSFER_IN"))
        .stdout(predicate::str::contains("From: Groceries | pizza night"));

    purse_cmd(&dir)
        .args(["history", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TRANSFER_OUT"))
        .stdout(predicate::str::contains("To: Fun Money | pizza night"));
}

#[test]
fn locked_purse_refuses_transfer_without_break_glass() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    purse_cmd(&dir)
        .args(["transfer", "Rent", "Groceries", "10.00", "--reason", "groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("locked"));

    // Balance unchanged, nothing audited
    purse_cmd(&dir)
        .args(["show", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allocated: $1200.00"));
    purse_cmd(&dir)
        .args(["history", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit history"));
}

#[test]
fn break_glass_transfer_out_of_locked_purse() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    purse_cmd(&dir)
        .args([
            "transfer",
            "Emergency Fund",
            "Groceries",
            "100.00",
            "--reason",
            "boiler burst",
            "--break-glass",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded as BREAK_GLASS"));

    purse_cmd(&dir)
        .args(["history", "Emergency Fund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BREAK_GLASS"));
}

#[test]
fn insufficient_funds_is_reported_and_harmless() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    purse_cmd(&dir)
        .args(["transfer", "Fun Money", "Groceries", "9999.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient funds"));

    purse_cmd(&dir)
        .args(["show", "Fun Money"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allocated: $150.00"));
}

#[test]
fn transfer_to_same_purse_is_rejected() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    purse_cmd(&dir)
        .args(["transfer", "Groceries", "groceries", "5.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("itself"));
}

#[test]
fn add_lock_and_transfer_new_purse() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    purse_cmd(&dir)
        .args(["add", "Vacation", "--allocated", "200.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created purse: Vacation"));

    purse_cmd(&dir)
        .args(["lock", "Vacation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Locked purse: Vacation"));

    purse_cmd(&dir)
        .args(["transfer", "Vacation", "Groceries", "50.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("locked"));

    purse_cmd(&dir)
        .args(["unlock", "Vacation"])
        .assert()
        .success();

    purse_cmd(&dir)
        .args(["transfer", "Vacation", "Groceries", "50.00"])
        .assert()
        .success();
}

#[test]
fn unknown_purse_is_reported() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    purse_cmd(&dir)
        .args(["show", "Yacht Fund"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Purse not found"));
}
