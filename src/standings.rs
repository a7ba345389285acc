//! Player standings: identity, current wins/spread, and the repeat-matchup table.

use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::history::PlayerRecord;

/// A single player's identity and mutable tournament state.
///
/// Combines identity (`name`, `index`) with the mutable record directly rather than indirecting
/// through a separate `Player` handle — at the player counts this engine targets, a plain vector
/// of these is cheaper and simpler to reason about than heap-allocated shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub index: usize,
    pub wins: i64,
    pub spread: i64,
    start_wins: i64,
    start_spread: i64,
}

impl Standing {
    fn new(name: String, index: usize, wins: i64, spread: i64) -> Self {
        Self {
            name,
            index,
            wins,
            spread,
            start_wins: wins,
            start_spread: spread,
        }
    }

    /// Restore `wins`/`spread` to the checkpoint captured at construction time.
    pub fn reset(&mut self) {
        self.wins = self.start_wins;
        self.spread = self.start_spread;
    }
}

/// Number of times each unordered pair of players has already met.
#[derive(Debug, Clone, Default)]
pub struct RepeatTable {
    counts: HashMap<(usize, usize), u32>,
}

fn normalize_pair(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl RepeatTable {
    fn record_meeting(&mut self, a: usize, b: usize) {
        *self.counts.entry(normalize_pair(a, b)).or_insert(0) += 1;
    }

    /// Number of times `a` and `b` have already played each other.
    pub fn times_played(&self, a: usize, b: usize) -> u32 {
        self.counts.get(&normalize_pair(a, b)).copied().unwrap_or(0)
    }

    /// Directly set a pair's meeting count, bypassing the history-derived halving. Used by
    /// other modules' tests to build a repeat table without hand-crafting matching history.
    #[cfg(test)]
    pub fn set_times_played(&mut self, a: usize, b: usize, count: u32) {
        self.counts.insert(normalize_pair(a, b), count);
    }
}

/// Ordered list of [`Standing`]s, sorted by the tournament's ranking invariant.
#[derive(Debug, Clone, Default)]
pub struct Standings(Vec<Standing>);

impl Standings {
    /// Build standings and the repeat-count table from parsed history records.
    ///
    /// Walks each player's recorded rounds, awarding half-win points (win=+2, draw=+1, loss=0)
    /// and accumulating signed spread. The same pass tallies repeat meetings; since every
    /// meeting appears in both players' histories, each count is halved before being returned.
    pub fn from_records(records: &[PlayerRecord]) -> Result<(Standings, RepeatTable)> {
        let mut standings: Vec<Standing> = records
            .iter()
            .enumerate()
            .map(|(index, record)| Standing::new(record.name.clone(), index, 0, 0))
            .collect();
        let mut repeats = RepeatTable::default();

        for (index, record) in records.iter().enumerate() {
            for (round, (&opponent, &own_score)) in record
                .opponent_indexes
                .iter()
                .zip(record.scores.iter())
                .enumerate()
            {
                let opponent_record = records.get(opponent).ok_or_else(|| {
                    anyhow::anyhow!(
                        "player {index} references unknown opponent index {opponent} in round {round}"
                    )
                })?;
                let opponent_score = *opponent_record.scores.get(round).ok_or_else(|| {
                    anyhow::anyhow!(
                        "player {opponent} has no recorded score for round {round}, required by opponent {index}"
                    )
                })?;

                let game_spread = own_score - opponent_score;
                standings[index].spread += game_spread;
                standings[index].wins += match game_spread.cmp(&0) {
                    std::cmp::Ordering::Greater => 2,
                    std::cmp::Ordering::Equal => 1,
                    std::cmp::Ordering::Less => 0,
                };

                repeats.record_meeting(index, opponent);
            }
        }

        for count in repeats.counts.values_mut() {
            if *count % 2 != 0 {
                bail!("repeat-count table has an odd entry; history is asymmetric");
            }
            *count /= 2;
        }

        for standing in &mut standings {
            standing.start_wins = standing.wins;
            standing.start_spread = standing.spread;
        }

        let mut standings = Standings(standings);
        standings.sort();
        Ok((standings, repeats))
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Standing> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Standing> {
        self.0.iter_mut()
    }

    /// Re-impose the `(wins DESC, spread DESC)` ordering invariant.
    pub fn sort(&mut self) {
        self.0
            .sort_by(|a, b| b.wins.cmp(&a.wins).then(b.spread.cmp(&a.spread)));
    }

    /// Restore every player's wins/spread to their checkpoint, without re-sorting.
    ///
    /// Callers run [`Standings::sort`] afterward; the two are kept separate because a caller
    /// that resets many standings lists in a tight loop may want to batch the sort.
    pub fn reset_all(&mut self) {
        for standing in &mut self.0 {
            standing.reset();
        }
    }

    pub fn as_slice(&self) -> &[Standing] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [Standing] {
        &mut self.0
    }
}

impl std::ops::Index<usize> for Standings {
    type Output = Standing;
    fn index(&self, rank: usize) -> &Standing {
        &self.0[rank]
    }
}

impl std::ops::IndexMut<usize> for Standings {
    fn index_mut(&mut self, rank: usize) -> &mut Standing {
        &mut self.0[rank]
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = &'a Standing;
    type IntoIter = std::slice::Iter<'a, Standing>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<PlayerRecord> {
        vec![
            PlayerRecord {
                name: "John Doe".into(),
                opponent_indexes: vec![1],
                scores: vec![400],
            },
            PlayerRecord {
                name: "Jane Roe".into(),
                opponent_indexes: vec![0],
                scores: vec![350],
            },
        ]
    }

    #[test]
    fn builds_wins_and_spread_from_history() {
        let (standings, _) = Standings::from_records(&sample_records()).unwrap();
        assert_eq!(standings[0].name, "John Doe");
        assert_eq!(standings[0].wins, 2);
        assert_eq!(standings[0].spread, 50);
        assert_eq!(standings[1].name, "Jane Roe");
        assert_eq!(standings[1].wins, 0);
        assert_eq!(standings[1].spread, -50);
    }

    #[test]
    fn repeat_table_is_halved_and_symmetric() {
        let (_, repeats) = Standings::from_records(&sample_records()).unwrap();
        assert_eq!(repeats.times_played(0, 1), 1);
        assert_eq!(repeats.times_played(1, 0), 1);
    }

    #[test]
    fn ordering_invariant_after_sort() {
        let mut standings = Standings(vec![
            Standing::new("Low".into(), 0, 2, -10),
            Standing::new("High".into(), 1, 4, 0),
            Standing::new("Mid".into(), 2, 4, 10),
        ]);
        standings.sort();
        assert_eq!(standings[0].name, "Mid");
        assert_eq!(standings[1].name, "High");
        assert_eq!(standings[2].name, "Low");
    }

    #[test]
    fn reset_round_trip() {
        let (mut standings, _) = Standings::from_records(&sample_records()).unwrap();
        let before = standings.clone();
        standings[0].wins += 100;
        standings[1].spread -= 7;
        standings.reset_all();
        standings.sort();
        assert_eq!(standings.as_slice(), before.as_slice());
    }
}
