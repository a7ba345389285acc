//! CLI flag-validation and smoke tests, driven by spawning the built binary directly (the
//! dependency corpus carries no CLI-testing harness crate, so these use `std::process::Command`
//! the same way the rest of this codebase's test suite shells out to child processes).

use std::process::Command;
use std::sync::atomic::{AtomicU32, Ordering};

/// A small history fixture written to a unique path under the system temp directory, removed
/// when dropped. No file-fixture crate is present anywhere in the dependency corpus, so this
/// is hand-rolled rather than pulled in as a new dependency.
struct HistoryFixture {
    path: std::path::PathBuf,
}

impl HistoryFixture {
    fn new(body: &str) -> Self {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("tourney_pairing_cli_test_{}_{n}.t", std::process::id()));
        std::fs::write(&path, body).expect("could not write history fixture");
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for HistoryFixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn history_fixture() -> HistoryFixture {
    HistoryFixture::new("Doe, John100 2;400\nRoe, Jane200 1;350\n")
}

#[test]
fn rejects_missing_history_source() {
    let output = Command::new(env!("CARGO_BIN_EXE_tourney-pairing"))
        .args(["sim", "--final", "2"])
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
}

#[test]
fn rejects_both_tfile_and_url() {
    let file = history_fixture();
    let output = Command::new(env!("CARGO_BIN_EXE_tourney-pairing"))
        .args([
            "sim",
            "--final",
            "2",
            "--tfile",
            file.path().to_str().unwrap(),
            "--url",
            "http://example.invalid/history.t",
        ])
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
}

#[test]
fn sim_runs_end_to_end_and_prints_a_tally() {
    let file = history_fixture();
    let output = Command::new(env!("CARGO_BIN_EXE_tourney-pairing"))
        .args([
            "sim",
            "--tfile",
            file.path().to_str().unwrap(),
            "--start",
            "1",
            "--final",
            "2",
            "--sim",
            "100",
            "--seed",
            "1",
        ])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Initial Standings"));
    assert!(stdout.contains("Simulation Results"));
}

#[test]
fn pair_runs_end_to_end_and_prints_a_pairing() {
    let file = history_fixture();
    let output = Command::new(env!("CARGO_BIN_EXE_tourney-pairing"))
        .args([
            "pair",
            "--tfile",
            file.path().to_str().unwrap(),
            "--start",
            "1",
            "--final",
            "2",
            "--sim",
            "100",
            "--seed",
            "1",
        ])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Next Round Pairing"));
    assert!(stdout.contains("John Doe"));
}
