//! The divider equation and the acceptance tests applied to candidate values.

/// Inclusive range check, `lo <= x <= hi`.
pub fn in_range(x: f64, lo: f64, hi: f64) -> bool {
    lo <= x && x <= hi
}

/// True if `actual` lies within `tol` (a fraction, relative to `target`) of `target`.
/// # Examples
/// ```
///     # use ldo_divider_calc::is_match;
///     assert!(is_match(3.3, 3.3, 0.001));
///     assert!(!is_match(3.3, 3.31, 0.001));
/// ```
pub fn is_match(target: f64, actual: f64, tol: f64) -> bool {
    (1.0 - tol) * target <= actual && actual <= (1.0 + tol) * target
}

/// Output voltage of a regulator holding `v_ref` at the tap between `r1` and `r_ground`.
///
/// `r_ground` must be positive.
pub fn v_out(v_ref: f64, r1: f64, r_ground: f64) -> f64 {
    v_ref * (1.0 + r1 / r_ground)
}
