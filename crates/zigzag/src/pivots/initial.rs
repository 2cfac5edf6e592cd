//! Classification of the first sample.
//!
//! The scanners need to know whether index 0 opens a down-move (it is a
//! peak) or an up-move (it is a valley) before they can start. The
//! classifier looks ahead until one of the thresholds is crossed relative to
//! the running extremes.

use crate::error::Result;
use crate::pivots::label::PivotLabel;
use crate::threshold::Thresholds;
use crate::traits::{SeriesElement, ValidatedInput};

/// Classifies index 0 of `data` as a peak or a valley.
///
/// Scans forward tracking the running maximum and minimum (both starting at
/// `data[0]`):
///
/// - the first rise of `up_thresh` above the running minimum makes index 0 a
///   valley if that minimum is still `data[0]`, and a peak otherwise;
/// - the first fall of `down_thresh` below the running maximum makes index 0
///   a peak if that maximum is still `data[0]`, and a valley otherwise;
/// - if neither threshold is ever crossed, index 0 is a valley when
///   `data[0] < data[last]` and a peak otherwise.
///
/// The result is never [`PivotLabel::None`].
///
/// # Errors
///
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InvalidThreshold` if `down_thresh > 0`
///
/// # Example
///
/// ```
/// use zigzag::{identify_initial_pivot, PivotLabel};
///
/// let rising_first = [1.0_f64, 1.05, 1.0, 0.9];
/// assert_eq!(identify_initial_pivot(&rising_first, 0.03, -0.03).unwrap(), PivotLabel::Valley);
///
/// let falling_first = [1.0_f64, 0.95, 1.0, 1.1];
/// assert_eq!(identify_initial_pivot(&falling_first, 0.03, -0.03).unwrap(), PivotLabel::Peak);
/// ```
pub fn identify_initial_pivot<T: SeriesElement>(
    data: &[T],
    up_thresh: T,
    down_thresh: T,
) -> Result<PivotLabel> {
    data.validate_not_empty()?;
    let thresholds = Thresholds::new(up_thresh, down_thresh)?;
    Ok(classify_initial(data, &thresholds))
}

/// Lookahead used by the scanners once inputs have been validated.
///
/// `data` must be non-empty.
pub(crate) fn classify_initial<T: SeriesElement>(
    data: &[T],
    thresholds: &Thresholds<T>,
) -> PivotLabel {
    let up_factor = thresholds.up_factor();
    let down_factor = thresholds.down_factor();

    let x_0 = data[0];
    let mut max_x = x_0;
    let mut min_x = x_0;
    let mut max_t = 0_usize;
    let mut min_t = 0_usize;

    for (t, &x_t) in data.iter().enumerate().skip(1) {
        if x_t / min_x >= up_factor {
            return if min_t == 0 {
                PivotLabel::Valley
            } else {
                PivotLabel::Peak
            };
        }

        if x_t / max_x <= down_factor {
            return if max_t == 0 {
                PivotLabel::Peak
            } else {
                PivotLabel::Valley
            };
        }

        if x_t > max_x {
            max_x = x_t;
            max_t = t;
        }
        if x_t < min_x {
            min_x = x_t;
            min_t = t;
        }
    }

    if x_0 < data[data.len() - 1] {
        PivotLabel::Valley
    } else {
        PivotLabel::Peak
    }
}
