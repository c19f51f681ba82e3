//! Per-section supplies of distinct ordered selections.
//!
//! Selections are index lists into a section's question vector. Two
//! strategies exist:
//!
//! - **Enumerated** — every k-permutation of the pool is listed, then the list
//!   is shuffled as a whole. Drawing walks the list, so a stream never repeats
//!   and never retries.
//! - **Sampled** — for pools whose nPk is above the enumeration limit. Each
//!   draw is a partial Fisher-Yates sample checked against the signatures
//!   already emitted; every try consumes one unit of a shared
//!   [`AttemptBudget`], so the batch always terminates.
//!
//! ## Index alignment
//!
//! Test `t` takes the `t`-th selection of every section's stream. Because no
//! stream repeats, any two tests of a batch differ in every section. The
//! pairing of selections *across* sections is only as random as the
//! independent stream shuffles make it: the batch does not explore the full
//! cross product of sections.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::shuffle_engine::combinatorics::n_pk;

/// How a stream produces its selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStrategy {
    Enumerated,
    Sampled,
}

/// Every ordered k-subset of `0..n`, in lexicographic order.
pub fn enumerate_permutations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn extend(n: usize, k: usize, used: &mut [bool], current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in 0..n {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(i);
            extend(n, k, used, current, out);
            current.pop();
            used[i] = false;
        }
    }

    let mut out = Vec::new();
    if k > n {
        return out;
    }
    let mut used = vec![false; n];
    let mut current = Vec::with_capacity(k);
    extend(n, k, &mut used, &mut current, &mut out);
    out
}

/// In-place Fisher-Yates shuffle that follows one position through the
/// swaps and returns where it ended up. A `tracked` outside the slice is
/// returned unchanged.
pub fn shuffle_tracking<T, R: Rng>(items: &mut [T], tracked: usize, rng: &mut R) -> usize {
    let mut tracked = tracked;
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
        if tracked == i {
            tracked = j;
        } else if tracked == j {
            tracked = i;
        }
    }
    tracked
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    shuffle_tracking(items, usize::MAX, rng);
}

/// A uniformly random ordered k-subset of `0..n` (partial Fisher-Yates).
pub fn sample_indices<R: Rng>(rng: &mut R, n: usize, k: usize) -> Vec<usize> {
    let k = k.min(n);
    let mut idx: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.gen_range(i..n);
        idx.swap(i, j);
    }
    idx.truncate(k);
    idx
}

/// Bounded number of sampling tries shared by one generation call.
#[derive(Debug, Clone)]
pub struct AttemptBudget {
    limit: usize,
    used: usize,
}

impl AttemptBudget {
    pub fn new(limit: usize) -> Self {
        AttemptBudget { limit, used: 0 }
    }

    /// Consume one attempt; false once the budget is spent.
    pub fn take(&mut self) -> bool {
        if self.used >= self.limit {
            return false;
        }
        self.used += 1;
        true
    }

    pub fn used(&self) -> usize {
        self.used
    }
}

/// A non-repeating supply of selections for one section.
#[derive(Debug, Clone)]
pub enum SelectionStream {
    Enumerated {
        selections: Vec<Vec<usize>>,
        cursor: usize,
    },
    Sampled {
        pool_size: usize,
        draw: usize,
        seen: HashSet<Vec<usize>>,
    },
}

impl SelectionStream {
    /// Enumerate when `nPk(pool_size, draw)` is within `enumeration_limit`,
    /// otherwise fall back to sampling.
    pub fn new<R: Rng>(rng: &mut R, pool_size: usize, draw: usize, enumeration_limit: u128) -> Self {
        let total = n_pk(pool_size, draw);
        if total <= enumeration_limit {
            let mut selections = enumerate_permutations(pool_size, draw);
            shuffle_in_place(&mut selections, rng);
            debug!(pool_size, draw, total = selections.len(), "enumerated section selections");
            SelectionStream::Enumerated { selections, cursor: 0 }
        } else {
            debug!(pool_size, draw, limit = %enumeration_limit, "section too large to enumerate, sampling");
            SelectionStream::Sampled { pool_size, draw, seen: HashSet::new() }
        }
    }

    pub fn strategy(&self) -> SelectionStrategy {
        match self {
            SelectionStream::Enumerated { .. } => SelectionStrategy::Enumerated,
            SelectionStream::Sampled { .. }    => SelectionStrategy::Sampled,
        }
    }

    /// Next unseen selection, or `None` when the enumeration is used up or
    /// the budget ran out.
    pub fn next_selection<R: Rng>(&mut self, rng: &mut R, budget: &mut AttemptBudget) -> Option<Vec<usize>> {
        match self {
            SelectionStream::Enumerated { selections, cursor } => {
                let next = selections.get(*cursor).cloned();
                if next.is_some() {
                    *cursor += 1;
                }
                next
            }
            SelectionStream::Sampled { pool_size, draw, seen } => {
                while budget.take() {
                    let candidate = sample_indices(rng, *pool_size, *draw);
                    if seen.insert(candidate.clone()) {
                        return Some(candidate);
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn enumeration_is_exhaustive_and_distinct() {
        let perms = enumerate_permutations(5, 3);
        assert_eq!(perms.len(), 60);
        let unique: HashSet<_> = perms.iter().cloned().collect();
        assert_eq!(unique.len(), 60);
        for p in &perms {
            let inner: HashSet<_> = p.iter().collect();
            assert_eq!(inner.len(), 3, "repeated index in {p:?}");
            assert!(p.iter().all(|&i| i < 5));
        }
    }

    #[test]
    fn enumeration_edge_cases() {
        assert_eq!(enumerate_permutations(3, 0), vec![Vec::<usize>::new()]);
        assert!(enumerate_permutations(2, 3).is_empty());
    }

    #[test]
    fn enumerated_stream_never_repeats_and_ends() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut budget = AttemptBudget::new(0);
        let mut stream = SelectionStream::new(&mut rng, 4, 2, 1_000_000);
        assert_eq!(stream.strategy(), SelectionStrategy::Enumerated);

        let mut seen = HashSet::new();
        while let Some(sel) = stream.next_selection(&mut rng, &mut budget) {
            assert!(seen.insert(sel));
        }
        assert_eq!(seen.len(), 12);
        assert_eq!(budget.used(), 0, "enumeration must not spend sampling attempts");
    }

    #[test]
    fn sampled_stream_stops_when_budget_is_spent() {
        let mut rng = StdRng::seed_from_u64(3);
        // 3P2 = 6 > limit 1, so the stream samples.
        let mut stream = SelectionStream::new(&mut rng, 3, 2, 1);
        assert_eq!(stream.strategy(), SelectionStrategy::Sampled);

        let mut budget = AttemptBudget::new(200);
        let mut seen = HashSet::new();
        while let Some(sel) = stream.next_selection(&mut rng, &mut budget) {
            assert!(seen.insert(sel));
        }
        assert!(seen.len() <= 6);
        assert_eq!(budget.used(), 200);
    }

    #[test]
    fn tracked_position_follows_its_item() {
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut items = vec!['a', 'b', 'c', 'd', 'e'];
            let at = shuffle_tracking(&mut items, 3, &mut rng);
            assert_eq!(items[at], 'd', "seed={seed}");
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(shuffle_tracking(&mut [1, 2, 3], 9, &mut rng), 9);
    }

    #[test]
    fn sample_indices_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let s = sample_indices(&mut rng, 10, 4);
            assert_eq!(s.len(), 4);
            let set: HashSet<_> = s.iter().collect();
            assert_eq!(set.len(), 4);
            assert!(s.iter().all(|&i| i < 10));
        }
    }
}
