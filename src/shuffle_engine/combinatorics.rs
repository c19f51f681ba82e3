/// Count of ordered k-subsets of n items, `n! / (n - k)!`.
///
/// Returns 1 for `k == 0` (including `n == 0`) and 0 for `k > n`.
/// Saturates at `u128::MAX` instead of overflowing, which callers treat as
/// "effectively unlimited".
pub fn n_pk(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let mut acc = 1u128;
    for factor in (n - k + 1)..=n {
        acc = match acc.checked_mul(factor as u128) {
            Some(v) => v,
            None => return u128::MAX,
        };
    }
    acc
}

/// Smallest nPk across sections: the number of tests the index-aligned
/// strategy can keep pairwise distinct. `None` when there are no sections.
pub fn aligned_capacity(pool_sizes: &[usize], draws: &[usize]) -> Option<u128> {
    pool_sizes
        .iter()
        .zip(draws)
        .map(|(&n, &k)| n_pk(n, k))
        .min()
}
