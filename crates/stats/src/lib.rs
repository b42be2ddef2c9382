//! Statistical helper functions for the floodrisk workspace.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Smallest and largest value of a slice, or `None` if empty.
///
/// NaN values are skipped.
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Returns a sorted copy of `data`.
///
/// **Expects finite input** (caller's responsibility); NaN compares equal to
/// everything and leaves the order unspecified.
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out
}

/// Linear-interpolation quantile (R type 7, numpy's default).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// First, second and third quartile of pre-sorted data (type 7).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quartiles(sorted: &[f64]) -> [f64; 3] {
    [
        quantile_type7(sorted, 0.25),
        quantile_type7(sorted, 0.50),
        quantile_type7(sorted, 0.75),
    ]
}
