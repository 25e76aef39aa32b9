//! Three ways to compute `1 + 2 + ... + n`.
//!
//! All variants agree for every `n: u32`; the result always fits in `u64`
//! because `u32::MAX * (u32::MAX + 1) / 2 < u64::MAX`.

/// O(n) loop.
pub fn sum_to_n_iterative(n: u32) -> u64 {
    let mut sum = 0u64;
    for i in 1..=u64::from(n) {
        sum += i;
    }
    sum
}

/// Divide and conquer over `lo..=hi`; recursion depth is O(log n).
pub fn sum_to_n_recursive(n: u32) -> u64 {
    fn range_sum(lo: u64, hi: u64) -> u64 {
        if lo > hi {
            return 0;
        }
        if lo == hi {
            return lo;
        }
        let mid = lo + (hi - lo) / 2;
        range_sum(lo, mid) + range_sum(mid + 1, hi)
    }
    range_sum(1, u64::from(n))
}

/// O(1) Gauss formula `n(n+1)/2`.
pub fn sum_to_n_closed_formula(n: u32) -> u64 {
    let n = u64::from(n);
    // one of n, n+1 is even, so halve that one first
    if n % 2 == 0 { (n / 2) * (n + 1) } else { n * ((n + 1) / 2) }
}
