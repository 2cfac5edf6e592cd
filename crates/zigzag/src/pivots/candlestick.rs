//! Peak/valley pivots of candlestick (high/low/close) data.
//!
//! Uses the same state machine as [`peak_valley_pivots`](super::peak_valley_pivots)
//! with two changes:
//!
//! - a peak candidate is the bar's high and a valley candidate is the bar's
//!   low, so the wick registers as the turning point;
//! - the threshold crossing is still measured close to close, from the close
//!   of the candidate's bar.
//!
//! The initial pivot is classified on the close series alone.

use crate::error::Result;
use crate::pivots::label::PivotLabel;
use crate::pivots::scanner::{scan_into, Candles};
use crate::threshold::Thresholds;
use crate::traits::{validate_same_length, SeriesElement, ValidatedInput};

/// Finds candlestick peaks and valleys and stores the labels in `output`.
///
/// # Arguments
///
/// * `close` - Close prices
/// * `high` - High prices
/// * `low` - Low prices
/// * `up_thresh` - Minimum relative rise that confirms a valley
/// * `down_thresh` - Minimum relative fall that confirms a peak (`<= 0`)
/// * `output` - Pre-allocated output slice (length >= `close.len()`)
///
/// # Errors
///
/// Returns an error if:
/// - `down_thresh > 0` (`Error::InvalidThreshold`)
/// - The three series differ in length (`Error::LengthMismatch`)
/// - The input data is empty (`Error::EmptyInput`)
/// - The output buffer is too small (`Error::BufferTooSmall`)
pub fn peak_valley_pivots_candlestick_into<T: SeriesElement>(
    close: &[T],
    high: &[T],
    low: &[T],
    up_thresh: T,
    down_thresh: T,
    output: &mut [PivotLabel],
) -> Result<()> {
    let thresholds = Thresholds::new(up_thresh, down_thresh)?;
    validate_same_length(&[
        ("close", close.len()),
        ("high", high.len()),
        ("low", low.len()),
    ])?;
    close.validate_not_empty()?;
    close.validate_output_len(output.len(), "peak_valley_pivots_candlestick")?;

    let candles = Candles { close, high, low };
    scan_into(
        &candles,
        &thresholds,
        output,
        "peak_valley_pivots_candlestick",
    );
    Ok(())
}

/// Finds the peaks and valleys of high/low/close data.
///
/// # Example
///
/// ```
/// use zigzag::{peak_valley_pivots_candlestick, PivotLabel};
///
/// let close = [10.0_f64, 11.5, 11.8, 10.4, 9.5, 9.9, 11.0];
/// let high = [10.2_f64, 12.5, 12.0, 10.6, 9.7, 10.1, 11.2];
/// let low = [9.8_f64, 11.2, 11.5, 10.2, 9.1, 8.8, 10.8];
///
/// let pivots = peak_valley_pivots_candlestick(&close, &high, &low, 0.1, -0.1).unwrap();
/// // The 12.5 wick at index 1 is the peak even though the highest close is at index 2.
/// assert_eq!(pivots[1], PivotLabel::Peak);
/// assert_eq!(pivots[5], PivotLabel::Valley);
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `down_thresh > 0` (`Error::InvalidThreshold`)
/// - The three series differ in length (`Error::LengthMismatch`)
/// - The input data is empty (`Error::EmptyInput`)
pub fn peak_valley_pivots_candlestick<T: SeriesElement>(
    close: &[T],
    high: &[T],
    low: &[T],
    up_thresh: T,
    down_thresh: T,
) -> Result<Vec<PivotLabel>> {
    let mut output = vec![PivotLabel::None; close.len()];
    peak_valley_pivots_candlestick_into(close, high, low, up_thresh, down_thresh, &mut output)?;
    Ok(output)
}
