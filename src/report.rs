//! Report Printer: renders standings, the simulation tally, forced-win probabilities, and
//! the next-round pairing as human-readable text.

use std::fmt::Write as _;

use crate::forced_win::ForcedWinResult;
use crate::pairing::PairingDecision;
use crate::standings::Standings;
use crate::tally::Tally;

/// Render the current standings, one line per rank: rank, name, wins (as a half-integer),
/// spread.
pub fn format_standings(standings: &Standings) -> String {
    let mut out = String::new();
    for (rank, standing) in standings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4}{:<30}{:>6.1} {:>6}",
            rank + 1,
            standing.name,
            standing.wins as f64 / 2.0,
            standing.spread
        );
    }
    out
}

/// Render the simulation tally as a matrix: rows are players in their original (load-order)
/// index, columns are finishing places, cells are trial counts.
pub fn format_tally(tally: &Tally, standings: &Standings) -> String {
    let player_count = tally.player_count();
    let mut names = vec![String::new(); player_count];
    for standing in standings.iter() {
        names[standing.index] = standing.name.clone();
    }

    let mut out = String::new();
    let _ = write!(out, "{:<30}", "");
    for place in 0..player_count {
        let _ = write!(out, "{:<7}", place + 1);
    }
    out.push('\n');

    for player in 0..player_count {
        let _ = write!(out, "{:<30}", names[player]);
        for place in 0..player_count {
            let _ = write!(out, "{:<7}", tally.get(player, place));
        }
        out.push('\n');
    }
    out
}

/// Render one line per qualifying forced-win contender.
pub fn format_forced_win(results: &[ForcedWinResult]) -> String {
    let mut out = String::new();
    for result in results {
        let _ = writeln!(
            out,
            "rank {:<4}{:<30}P(win) = {:.4}",
            result.rank + 1,
            result.name,
            result.win_probability
        );
    }
    out
}

/// Render the next-round pairing list: rank pairs with player names and a "times played
/// together" annotation.
pub fn format_pairing(decisions: &[PairingDecision], standings: &Standings) -> String {
    let mut out = String::new();
    for decision in decisions {
        let first = &standings[decision.rank_i];
        match decision.rank_j {
            Some(rank_j) => {
                let second = &standings[rank_j];
                let _ = writeln!(
                    out,
                    "{:<30} vs {:<30} (played {} times)",
                    first.name, second.name, decision.times_played
                );
            }
            None => {
                let _ = writeln!(out, "{:<30} receives a bye", first.name);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::PlayerRecord;

    fn sample_standings() -> Standings {
        let records = vec![
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
        ];
        Standings::from_records(&records).unwrap().0
    }

    #[test]
    fn standings_report_shows_half_integer_wins() {
        let standings = sample_standings();
        let report = format_standings(&standings);
        assert!(report.contains("John Doe"));
        assert!(report.contains("1.0"));
        assert!(report.contains("50"));
    }

    #[test]
    fn tally_report_has_a_header_row_and_one_row_per_player() {
        let standings = sample_standings();
        let mut tally = Tally::new(2);
        tally.record(&standings);
        let report = format_tally(&tally, &standings);
        assert_eq!(report.lines().count(), 3);
    }

    #[test]
    fn pairing_report_annotates_bye_and_rematch_count() {
        let standings = sample_standings();
        let decisions = vec![PairingDecision {
            rank_i: 0,
            rank_j: Some(1),
            times_played: 2,
        }];
        let report = format_pairing(&decisions, &standings);
        assert!(report.contains("John Doe"));
        assert!(report.contains("Jane Roe"));
        assert!(report.contains("played 2 times"));
    }
}
