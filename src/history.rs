//! Tournament history file (`.t`) parsing.
//!
//! Each line describes one player: their name, the 1-based opponent index for every round
//! they've played, and their own score in that round. See [`parse_str`] for the exact grammar.

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// One player's raw history, as read from a `.t` file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    /// 0-based opponent index per round already played.
    pub opponent_indexes: Vec<usize>,
    /// This player's own score per round already played.
    pub scores: Vec<i64>,
}

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^,]+),\s*(\D+)\d+\s+([\d\s]+);\s*([\-\d\s]+)$")
        .expect("history line pattern is a valid regex")
});

/// Parse a single `.t` line into a [`PlayerRecord`], truncated to `start_round` rounds.
///
/// Returns `Ok(None)` for blank lines, which callers should simply skip.
pub fn parse_line(line: &str, start_round: usize) -> Result<Option<PlayerRecord>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let caps = LINE_PATTERN
        .captures(trimmed)
        .with_context(|| format!("malformed history line: {trimmed:?}"))?;

    let last_name = caps[1].trim();
    let first_name = caps[2].trim();
    let name = format!("{first_name} {last_name}");

    let mut opponent_indexes: Vec<usize> = Vec::new();
    for tok in caps[3].split_whitespace() {
        let one_based: usize = tok
            .parse()
            .with_context(|| format!("invalid opponent index {tok:?} in line {trimmed:?}"))?;
        opponent_indexes.push(one_based.saturating_sub(1));
    }

    let mut scores: Vec<i64> = Vec::new();
    for tok in caps[4].split_whitespace() {
        let score: i64 = tok
            .parse()
            .with_context(|| format!("invalid score {tok:?} in line {trimmed:?}"))?;
        scores.push(score);
    }

    opponent_indexes.truncate(start_round);
    scores.truncate(start_round);

    if opponent_indexes.len() != scores.len() {
        bail!(
            "opponent/score count mismatch after truncating to {start_round} rounds: {trimmed:?}"
        );
    }

    Ok(Some(PlayerRecord {
        name,
        opponent_indexes,
        scores,
    }))
}

/// Parse a complete `.t` file body into one record per non-blank line.
pub fn parse_str(body: &str, start_round: usize) -> Result<Vec<PlayerRecord>> {
    let mut records = Vec::new();
    for line in body.lines() {
        if let Some(record) = parse_line(line, start_round)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Read and parse a `.t` file from disk.
pub fn read_file(path: impl AsRef<Path>, start_round: usize) -> Result<Vec<PlayerRecord>> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("could not read history file {}", path.display()))?;
    parse_str(&body, start_round)
        .with_context(|| format!("could not parse history file {}", path.display()))
}
