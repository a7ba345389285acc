//! Round Player: applies a single round's pairings to the standings.

use rand::Rng;

use crate::standings::Standings;

/// One pairing, expressed as ranks (0-based indexes into the current sorted standings). A bye
/// is represented by `None` in the second slot.
pub type Pairing = (usize, Option<usize>);

const SPREAD_MIN: i64 = -200;
const SPREAD_MAX: i64 = 200;
const BYE_SPREAD: i64 = 50;
const BYE_WINS: i64 = 2;

/// Apply every pairing's outcome to `standings`, then re-impose the ranking invariant.
///
/// `forced_win_player` names a rank (at call time, before any pairing is applied) that must win
/// its game by at least one point, used by the forced-win simulator.
pub fn play_round<R: Rng + ?Sized>(
    pairings: &[Pairing],
    standings: &mut Standings,
    forced_win_player: Option<usize>,
    rng: &mut R,
) {
    for &(first, second) in pairings {
        let Some(second) = second else {
            standings[first].spread += BYE_SPREAD;
            standings[first].wins += BYE_WINS;
            continue;
        };

        let mut spread = rng.gen_range(SPREAD_MIN..=SPREAD_MAX);

        if forced_win_player == Some(first) {
            spread = spread.abs() + 1;
        } else if forced_win_player == Some(second) {
            spread = -(spread.abs() + 1);
        }

        let (first_wins, second_wins) = match spread.cmp(&0) {
            std::cmp::Ordering::Greater => (2, 0),
            std::cmp::Ordering::Equal => (1, 1),
            std::cmp::Ordering::Less => (0, 2),
        };

        standings[first].wins += first_wins;
        standings[second].wins += second_wins;
        standings[first].spread += spread;
        standings[second].spread -= spread;
    }

    standings.sort();
}
