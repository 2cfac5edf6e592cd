//! Maximum drawdown.

use tracing::debug;

use crate::error::Result;
use crate::traits::{SeriesElement, ValidatedInput};

/// Returns the largest relative decline from a running peak.
///
/// The running peak starts at `data[0]` and the drawdown at each sample is
/// `(peak - x) / peak`. The result is `0` for a non-decreasing series and
/// never negative for positive prices.
///
/// Division by a zero peak and NaN samples follow IEEE semantics.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `data` is empty.
///
/// # Example
///
/// ```
/// use zigzag::max_drawdown;
///
/// let equity = [100.0_f64, 120.0, 90.0, 130.0, 104.0];
/// let dd = max_drawdown(&equity).unwrap();
/// assert!((dd - 0.25).abs() < 1e-12);
/// ```
pub fn max_drawdown<T: SeriesElement>(data: &[T]) -> Result<T> {
    data.validate_not_empty()?;

    let mut peak = data[0];
    let mut max_dd = T::zero();
    for &x in data {
        if x > peak {
            peak = x;
        }
        let dd = (peak - x) / peak;
        if dd > max_dd {
            max_dd = dd;
        }
    }

    debug!(len = data.len(), max_drawdown = max_dd.to_f64_lossy(), "computed max drawdown");
    Ok(max_dd)
}
