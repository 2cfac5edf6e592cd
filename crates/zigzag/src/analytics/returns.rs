//! Pivot-to-pivot segment returns.

use crate::error::Result;
use crate::pivots::label::PivotLabel;
use crate::traits::{validate_same_length, SeriesElement};

/// Returns the indices of all labeled pivots, in order.
///
/// ```
/// use zigzag::{pivot_indices, PivotLabel::{None, Peak, Valley}};
///
/// assert_eq!(pivot_indices(&[Valley, None, Peak, None, Valley]), vec![0, 2, 4]);
/// ```
#[must_use]
pub fn pivot_indices(pivots: &[PivotLabel]) -> Vec<usize> {
    pivots
        .iter()
        .enumerate()
        .filter(|(_, label)| label.is_pivot())
        .map(|(t, _)| t)
        .collect()
}

/// Computes the relative return of each leg between consecutive pivots.
///
/// For pivot values `v[0], v[1], ...` taken from `data` at the labeled
/// indices, element `i` of the result is `v[i + 1] / v[i] - 1`. Fewer than
/// two pivots yield an empty vector.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `data` and `pivots` differ in length.
///
/// # Example
///
/// ```
/// use zigzag::{peak_valley_pivots, segment_returns};
///
/// let prices = [1.0_f64, 1.05, 1.00, 0.90, 0.95, 1.10];
/// let pivots = peak_valley_pivots(&prices, 0.03, -0.03).unwrap();
/// let returns = segment_returns(&prices, &pivots).unwrap();
///
/// assert_eq!(returns.len(), 3);
/// assert!((returns[0] - 0.05).abs() < 1e-12);
/// ```
pub fn segment_returns<T: SeriesElement>(data: &[T], pivots: &[PivotLabel]) -> Result<Vec<T>> {
    validate_same_length(&[("data", data.len()), ("pivots", pivots.len())])?;

    let values: Vec<T> = pivot_indices(pivots).into_iter().map(|t| data[t]).collect();
    Ok(values.windows(2).map(|w| w[1] / w[0] - T::one()).collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;
    use crate::pivots::label::PivotLabel::{None as N, Peak as P, Valley as V};
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_pivot_indices() {
        assert_eq!(pivot_indices(&[V, P, N, V, N, P]), vec![0, 1, 3, 5]);
        assert!(pivot_indices(&[N, N]).is_empty());
        assert!(pivot_indices(&[]).is_empty());
    }

    #[test]
    fn test_segment_returns() {
        let data = [100.0_f64, 120.0, 110.0, 90.0];
        let result = segment_returns(&data, &[V, P, N, V]).unwrap();
        assert_eq!(result.len(), 2);
        assert!(approx_eq(result[0], 0.2, EPSILON));
        assert!(approx_eq(result[1], -0.25, EPSILON));
    }

    #[test]
    fn test_fewer_than_two_pivots() {
        assert!(segment_returns(&[1.0_f64, 2.0], &[P, N]).unwrap().is_empty());
        assert!(segment_returns(&[1.0_f64, 2.0], &[N, N]).unwrap().is_empty());
        let empty: [f64; 0] = [];
        assert!(segment_returns(&empty, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        match segment_returns(&[1.0_f64, 2.0, 3.0], &[P, V]) {
            Err(Error::LengthMismatch { description }) => {
                assert_eq!(description, "data has 3 elements, pivots has 2");
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }
}
