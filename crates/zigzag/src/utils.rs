//! Utility functions for zigzag.
//!
//! # Floating-Point Comparison
//!
//! Derived analytics such as segment returns and drawdowns involve division,
//! so exact equality is rarely what a caller wants. These helpers compare
//! with a tolerance and treat two NaNs as equal.
//!
//! ```
//! use zigzag::utils::{approx_eq, EPSILON};
//!
//! let a = 1.05_f64 / 1.0 - 1.0;
//! assert!(approx_eq(a, 0.05, EPSILON));
//! ```

use crate::pivots::PivotLabel;
use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for `f32` data or long accumulations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN.
///
/// ```
/// use zigzag::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// Returns `true` if the relative difference between `a` and `b` is less than
/// `rel_tolerance`, or if both are NaN.
///
/// ```
/// use zigzag::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}

/// Counts the labeled pivots (peaks and valleys) in a pivot array.
///
/// ```
/// use zigzag::utils::count_pivots;
/// use zigzag::PivotLabel::{None, Peak, Valley};
///
/// assert_eq!(count_pivots(&[Valley, None, Peak, None]), 2);
/// ```
#[inline]
#[must_use]
pub fn count_pivots(pivots: &[PivotLabel]) -> usize {
    pivots.iter().filter(|l| l.is_pivot()).count()
}

/// Returns `true` if the labeled pivots strictly alternate between peaks and
/// valleys, ignoring the final index.
///
/// The last sample is labeled by the end-of-series rule and may repeat the
/// previous pivot's side, so it is excluded from the check.
#[must_use]
pub fn pivots_alternate(pivots: &[PivotLabel]) -> bool {
    let Some((_, body)) = pivots.split_last() else {
        return true;
    };
    let mut previous: Option<PivotLabel> = None;
    for &label in body.iter().filter(|l| l.is_pivot()) {
        if previous == Some(label) {
            return false;
        }
        previous = Some(label);
    }
    true
}
