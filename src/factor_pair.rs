//! Factor Pairer: deterministic "KOTH lookahead" schedule used inside simulations.

use crate::round::Pairing;

/// Build the deterministic pairing for one simulated round.
///
/// `player_count` must be even; `nrl` is the number of rounds remaining, including this one.
/// Ranks `[0, nrl)` are paired with `[nrl, 2*nrl)` (rank `i` against rank `i+nrl`), and the
/// remaining tail from `2*nrl` onward is paired adjacently.
pub fn factor_pair(player_count: usize, nrl: usize) -> Vec<Pairing> {
    assert!(
        player_count % 2 == 0,
        "factor_pair requires an even player count; pad a bye in first"
    );
    if player_count == 0 {
        return Vec::new();
    }
    let nrl = nrl.min(player_count / 2).max(1);

    let mut pairings = Vec::with_capacity(player_count / 2);
    for i in 0..nrl {
        pairings.push((i, Some(i + nrl)));
    }
    let mut i = 2 * nrl;
    while i < player_count {
        pairings.push((i, Some(i + 1)));
        i += 2;
    }
    pairings
}

/// Variant of [`factor_pair`] that tolerates an odd `player_count` by handing the last rank
/// a bye, for use on the trimmed remainder inside `factor_pair_minus_player` (see
/// [`crate::forced_win`]).
pub fn factor_pair_with_bye(player_count: usize, nrl: usize) -> Vec<Pairing> {
    if player_count == 0 {
        return Vec::new();
    }
    if player_count % 2 == 0 {
        return factor_pair(player_count, nrl);
    }
    let mut pairings = factor_pair(player_count - 1, nrl);
    pairings.push((player_count - 1, None));
    pairings
}
