//! Score Monitor: an independent GCG-log watcher.
//!
//! Unrelated to the simulation/pairing core. Re-parses a whole game-annotation (GCG) log on
//! every change to compute per-player running scores and the set of tiles remaining unseen,
//! then writes three small output files a scorekeeping display can poll.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

const VOWELS: &str = "AEIOUY";

/// Standard English Scrabble tile distribution (100 tiles, including 2 blanks under `?`).
fn initial_bag() -> BTreeMap<char, u32> {
    [
        ('A', 9), ('B', 2), ('C', 2), ('D', 4), ('E', 12), ('F', 2), ('G', 3), ('H', 2),
        ('I', 9), ('J', 1), ('K', 1), ('L', 4), ('M', 2), ('N', 6), ('O', 8), ('P', 2),
        ('Q', 1), ('R', 6), ('S', 4), ('T', 6), ('U', 4), ('V', 2), ('W', 2), ('X', 1),
        ('Y', 2), ('Z', 1), ('?', 2),
    ]
    .into_iter()
    .collect()
}

static PLAYER1_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#player1\s+(\w+)").unwrap());
static PLAYER2_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#player2\s+(\w+)").unwrap());
static FINAL_SCORE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>(\w+).*\D(\d+)$").unwrap());
static PLAYED_TILES_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^>\w+:\s+[\w?]+\s+\S+\s+([\w.]+)").unwrap());
static LOST_CHALLENGE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>\w+:\s+[\w?]+\s+--").unwrap());
static RACK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#rack\d\s+([\w?]+)").unwrap());

/// The result of one GCG parse pass: final scores in player order, the unseen-tile bag
/// rendered as a space-separated string, and the unseen tile/vowel/consonant counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcgSummary {
    /// `(player_name, score)` pairs in the order players were first seen in the log.
    pub final_scores: Vec<(String, i64)>,
    pub team_going_first: String,
    pub unseen_tiles: String,
    pub unseen_tile_count: u32,
    pub unseen_vowel_count: u32,
    pub unseen_consonant_count: u32,
}

/// Decrement the bag for every tile in `tiles`. Lowercase letters denote a blank played as
/// that letter and draw from the `?` bucket instead; `.` is a placeholder that consumes no
/// tile.
fn consume_tiles(bag: &mut BTreeMap<char, u32>, tiles: &str) {
    for letter in tiles.chars() {
        if letter == '.' {
            continue;
        }
        let key = if letter.is_lowercase() { '?' } else { letter.to_ascii_uppercase() };
        if let Some(count) = bag.get_mut(&key) {
            *count = count.saturating_sub(1);
        }
    }
}

/// Restore the bag for every tile in `tiles`, the inverse of [`consume_tiles`], used when a
/// challenge overturns a previously played move.
fn restore_tiles(bag: &mut BTreeMap<char, u32>, tiles: &str) {
    for letter in tiles.chars() {
        if letter == '.' {
            continue;
        }
        let key = if letter.is_lowercase() { '?' } else { letter.to_ascii_uppercase() };
        if let Some(count) = bag.get_mut(&key) {
            *count += 1;
        }
    }
}

/// Parse a complete GCG log body into a [`GcgSummary`].
pub fn parse_gcg(body: &str) -> Result<GcgSummary> {
    let mut bag = initial_bag();
    let mut final_scores: Vec<(String, i64)> = Vec::new();
    let mut team_going_first = String::new();
    let mut previous_played_tiles = String::new();

    for line in body.lines() {
        if let Some(caps) = PLAYER1_LINE.captures(line) {
            let name = caps[1].to_string();
            if team_going_first.is_empty() {
                team_going_first = name.clone();
            }
            if !final_scores.iter().any(|(n, _)| n == &name) {
                final_scores.push((name, 0));
            }
            continue;
        }
        if let Some(caps) = PLAYER2_LINE.captures(line) {
            let name = caps[1].to_string();
            if !final_scores.iter().any(|(n, _)| n == &name) {
                final_scores.push((name, 0));
            }
            continue;
        }
        if let Some(caps) = LOST_CHALLENGE_LINE.captures(line) {
            let _ = caps;
            restore_tiles(&mut bag, &previous_played_tiles);
            continue;
        }
        if let Some(caps) = FINAL_SCORE_LINE.captures(line) {
            let name = caps[1].to_string();
            let score: i64 = caps[2]
                .parse()
                .with_context(|| format!("invalid score in GCG line {line:?}"))?;
            if let Some(entry) = final_scores.iter_mut().find(|(n, _)| n == &name) {
                entry.1 = score;
            } else {
                final_scores.push((name, score));
            }
            // A move line ends in its cumulative score, so it also matches this pattern;
            // fall through (no `continue`) so the same line still updates the tile bag below.
        }
        if let Some(caps) = PLAYED_TILES_LINE.captures(line) {
            let played_tiles = caps[1].to_string();
            consume_tiles(&mut bag, &played_tiles);
            previous_played_tiles = played_tiles;
            continue;
        }
        if let Some(caps) = RACK_LINE.captures(line) {
            consume_tiles(&mut bag, &caps[1]);
            continue;
        }
    }

    let mut unseen_tiles = String::new();
    let mut unseen_tile_count = 0u32;
    let mut unseen_vowel_count = 0u32;
    for (&letter, &count) in bag.iter() {
        if count == 0 {
            continue;
        }
        for _ in 0..count {
            unseen_tiles.push(letter);
        }
        unseen_tiles.push(' ');
        unseen_tile_count += count;
        if VOWELS.contains(letter) {
            unseen_vowel_count += count;
        }
    }

    Ok(GcgSummary {
        final_scores,
        team_going_first,
        unseen_tiles: unseen_tiles.trim_end().to_string(),
        unseen_tile_count,
        unseen_vowel_count,
        unseen_consonant_count: unseen_tile_count - unseen_vowel_count,
    })
}

/// Render the three output-file bodies for a [`GcgSummary`]: scores string, unseen-tiles
/// string, counts summary.
pub fn render_outputs(summary: &GcgSummary) -> (String, String, String) {
    let mut scores = String::new();
    for (name, score) in &summary.final_scores {
        if *name == summary.team_going_first {
            scores.push_str(&format!("{score:>3} - "));
        } else {
            scores.push_str(&format!("{score:<3}"));
        }
    }

    let counts = format!(
        "{:>10} tiles\n{:>2} vowels | {:>2} consonants",
        summary.unseen_tile_count, summary.unseen_vowel_count, summary.unseen_consonant_count
    );

    (scores, summary.unseen_tiles.clone(), counts)
}

/// Parse `gcg_path` and write the score/unseen-tiles/counts files once.
pub fn run_once(
    gcg_path: impl AsRef<Path>,
    score_path: impl AsRef<Path>,
    unseen_path: impl AsRef<Path>,
    count_path: impl AsRef<Path>,
) -> Result<GcgSummary> {
    let gcg_path = gcg_path.as_ref();
    let body = std::fs::read_to_string(gcg_path)
        .with_context(|| format!("could not read GCG log {}", gcg_path.display()))?;
    let summary = parse_gcg(&body)?;
    let (scores, unseen, counts) = render_outputs(&summary);

    std::fs::write(&score_path, scores)
        .with_context(|| format!("could not write score file {}", score_path.as_ref().display()))?;
    std::fs::write(&unseen_path, unseen)
        .with_context(|| format!("could not write unseen-tiles file {}", unseen_path.as_ref().display()))?;
    std::fs::write(&count_path, counts)
        .with_context(|| format!("could not write counts file {}", count_path.as_ref().display()))?;

    Ok(summary)
}

/// Poll `gcg_path`'s modification time and re-run [`run_once`] whenever it changes.
///
/// No OS-level file-watch crate is present in this dependency stack, so a short-interval poll
/// comparing file modification time stands in for a push-based watcher; this matches the rest
/// of the engine's synchronous, single-threaded execution model. Runs until `gcg_path` cannot
/// be stat'd at all.
pub fn watch(
    gcg_path: impl AsRef<Path>,
    score_path: impl AsRef<Path>,
    unseen_path: impl AsRef<Path>,
    count_path: impl AsRef<Path>,
    poll_interval: Duration,
) -> Result<()> {
    let gcg_path = gcg_path.as_ref();
    let mut last_modified: Option<SystemTime> = None;

    loop {
        let modified = std::fs::metadata(gcg_path)
            .with_context(|| format!("could not stat GCG log {}", gcg_path.display()))?
            .modified()
            .with_context(|| format!("filesystem does not report modification times for {}", gcg_path.display()))?;

        if last_modified != Some(modified) {
            let summary = run_once(gcg_path, &score_path, &unseen_path, &count_path)?;
            tracing::info!(
                players = summary.final_scores.len(),
                unseen = summary.unseen_tile_count,
                "re-parsed GCG log"
            );
            last_modified = Some(modified);
        }

        std::thread::sleep(poll_interval);
    }
}
