//! Minimum-weight perfect matching on a general (non-bipartite) complete graph.
//!
//! The pairing optimizer (see [`crate::pairing`]) needs an exact minimum-weight perfect
//! matching on a complete graph of at most a couple hundred vertices; no crate in this
//! dependency stack provides one. A textbook Edmonds blossom algorithm handles arbitrary
//! sparse graphs in polynomial time, but it is a large, delicate piece of machinery whose
//! subtle bugs are nearly impossible to catch without a test suite to run against. Since
//! this engine's graph is always complete and small, a branch-and-bound search is both
//! exact and far easier to verify by inspection: it prunes a branch the moment its partial
//! weight reaches the best complete matching found so far, and a greedy warm start keeps
//! that bound tight from the first call.

/// Find a minimum-weight perfect matching on the complete graph of `n` vertices (`n` even),
/// using `weight(i, j)` for the cost of pairing `i` with `j`.
///
/// Returns the matching as `(i, j)` pairs with `i < j`, sorted ascending by `i`. Panics if
/// `n` is odd — callers must pad in a virtual bye vertex with zero-weight edges first.
pub fn min_weight_perfect_matching(n: usize, weight: impl Fn(usize, usize) -> i64) -> Vec<(usize, usize)> {
    assert!(n % 2 == 0, "perfect matching requires an even vertex count");
    if n == 0 {
        return Vec::new();
    }

    let mut solver = Solver {
        n,
        weight: &weight,
        used: vec![false; n],
        current: Vec::with_capacity(n / 2),
        best: Vec::new(),
        best_weight: i64::MAX,
    };
    solver.seed_greedy();
    solver.search(0);

    assert_eq!(
        solver.best.len(),
        n / 2,
        "branch-and-bound failed to find a perfect matching"
    );
    let mut best = solver.best;
    best.sort_by_key(|&(i, _)| i);
    best
}

struct Solver<'a, F: Fn(usize, usize) -> i64> {
    n: usize,
    weight: &'a F,
    used: Vec<bool>,
    current: Vec<(usize, usize)>,
    best: Vec<(usize, usize)>,
    best_weight: i64,
}

impl<'a, F: Fn(usize, usize) -> i64> Solver<'a, F> {
    /// Seed `best`/`best_weight` with a cheap-first greedy matching so the branch-and-bound
    /// search has a useful bound to prune against from the very first call.
    fn seed_greedy(&mut self) {
        let mut used = vec![false; self.n];
        let mut pairs = Vec::with_capacity(self.n / 2);
        let mut total = 0i64;
        for i in 0..self.n {
            if used[i] {
                continue;
            }
            used[i] = true;
            let j = (i + 1..self.n)
                .filter(|&j| !used[j])
                .min_by_key(|&j| (self.weight)(i, j))
                .expect("an even remainder always has an unused partner");
            used[j] = true;
            total += (self.weight)(i, j);
            pairs.push((i, j));
        }
        self.best = pairs;
        self.best_weight = total;
    }

    fn search(&mut self, partial_weight: i64) {
        if partial_weight >= self.best_weight {
            return;
        }
        let Some(i) = (0..self.n).find(|&k| !self.used[k]) else {
            self.best = self.current.clone();
            self.best_weight = partial_weight;
            return;
        };
        self.used[i] = true;
        for j in (i + 1)..self.n {
            if self.used[j] {
                continue;
            }
            let edge_weight = (self.weight)(i, j);
            if partial_weight + edge_weight >= self.best_weight {
                continue;
            }
            self.used[j] = true;
            self.current.push((i, j));
            self.search(partial_weight + edge_weight);
            self.current.pop();
            self.used[j] = false;
        }
        self.used[i] = false;
    }
}

/// Exhaustively enumerate every perfect matching and return the minimum-weight one.
///
/// No pruning, no greedy warm start — used only to cross-check
/// [`min_weight_perfect_matching`] in tests at small vertex counts.
#[cfg(test)]
pub fn brute_force_min_weight_perfect_matching(
    n: usize,
    weight: impl Fn(usize, usize) -> i64,
) -> Vec<(usize, usize)> {
    assert!(n % 2 == 0);
    fn recurse(
        remaining: &[usize],
        current: &mut Vec<(usize, usize)>,
        weight: &impl Fn(usize, usize) -> i64,
        best: &mut Option<(i64, Vec<(usize, usize)>)>,
    ) {
        if remaining.is_empty() {
            let total: i64 = current.iter().map(|&(i, j)| weight(i, j)).sum();
            if best.as_ref().map(|(w, _)| total < *w).unwrap_or(true) {
                *best = Some((total, current.clone()));
            }
            return;
        }
        let first = remaining[0];
        for k in 1..remaining.len() {
            let partner = remaining[k];
            let mut rest: Vec<usize> = remaining[1..].to_vec();
            rest.remove(k - 1);
            current.push((first.min(partner), first.max(partner)));
            recurse(&rest, current, weight, best);
            current.pop();
        }
    }

    let all: Vec<usize> = (0..n).collect();
    let mut best = None;
    recurse(&all, &mut Vec::new(), &weight, &mut best);
    let mut matching = best.expect("perfect matching always exists on a complete graph").1;
    matching.sort_by_key(|&(i, _)| i);
    matching
}
