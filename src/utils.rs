//! Assorted utilities and helpers.

/// Index and value of the largest of `len` values produced by `value_at`,
/// preferring the lowest index on ties.
///
/// Only a strictly greater value replaces the running best, so equal
/// candidates resolve to the earliest one. A NaN never replaces the running
/// best. Returns `None` when `len == 0`.
#[inline]
pub fn argmax_first_by(len: usize, mut value_at: impl FnMut(usize) -> f64) -> Option<(usize, f64)> {
    if len == 0 {
        return None;
    }
    let mut best_idx = 0;
    let mut best = value_at(0);
    for i in 1..len {
        let v = value_at(i);
        if v > best {
            best = v;
            best_idx = i;
        }
    }
    Some((best_idx, best))
}

/// [`argmax_first_by`] over a slice.
#[inline]
pub fn argmax_first(values: &[f64]) -> Option<(usize, f64)> {
    argmax_first_by(values.len(), |i| values[i])
}

/// State count at or above which a column is computed in parallel when the
/// `parallel` feature is enabled.
#[inline]
pub fn default_parallel_threshold() -> usize {
    64
}
