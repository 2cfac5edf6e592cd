//! Peak/valley pivots of a single price series.
//!
//! # Boundary labels
//!
//! The first and last samples are always labeled as a peak or a valley,
//! even if the segments they bound never reach the thresholds. Dropping
//! them would silently exclude the data at the edges from any analysis
//! built on the pivots.

use crate::error::Result;
use crate::pivots::label::PivotLabel;
use crate::pivots::scanner::{scan_into, SingleSeries};
use crate::threshold::Thresholds;
use crate::traits::{SeriesElement, ValidatedInput};

/// Finds the peaks and valleys of a series and stores the labels in `output`.
///
/// # Arguments
///
/// * `data` - Input series
/// * `up_thresh` - Minimum relative rise that confirms a valley (e.g. `0.05`)
/// * `down_thresh` - Minimum relative fall that confirms a peak (e.g. `-0.05`)
/// * `output` - Pre-allocated output slice (length >= `data.len()`)
///
/// # Errors
///
/// Returns an error if:
/// - The input data is empty (`Error::EmptyInput`)
/// - `down_thresh > 0` (`Error::InvalidThreshold`)
/// - The output buffer is too small (`Error::BufferTooSmall`)
pub fn peak_valley_pivots_into<T: SeriesElement>(
    data: &[T],
    up_thresh: T,
    down_thresh: T,
    output: &mut [PivotLabel],
) -> Result<()> {
    let thresholds = Thresholds::new(up_thresh, down_thresh)?;
    data.validate_not_empty()?;
    data.validate_output_len(output.len(), "peak_valley_pivots")?;

    scan_into(&SingleSeries(data), &thresholds, output, "peak_valley_pivots");
    Ok(())
}

/// Finds the peaks and valleys of a series.
///
/// Returns one label per sample: [`PivotLabel::Peak`], [`PivotLabel::Valley`]
/// or [`PivotLabel::None`]. Confirmed pivots alternate between peaks and
/// valleys; the first and last samples are always labeled.
///
/// # Example
///
/// ```
/// use zigzag::{peak_valley_pivots, PivotLabel::{None, Peak, Valley}};
///
/// let prices = vec![1.0_f64, 1.05, 1.00, 0.90, 0.95, 1.10];
/// let pivots = peak_valley_pivots(&prices, 0.03, -0.03).unwrap();
/// assert_eq!(pivots, vec![Valley, Peak, None, Valley, None, Peak]);
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The input data is empty (`Error::EmptyInput`)
/// - `down_thresh > 0` (`Error::InvalidThreshold`)
pub fn peak_valley_pivots<T: SeriesElement>(
    data: &[T],
    up_thresh: T,
    down_thresh: T,
) -> Result<Vec<PivotLabel>> {
    let mut output = vec![PivotLabel::None; data.len()];
    peak_valley_pivots_into(data, up_thresh, down_thresh, &mut output)?;
    Ok(output)
}
