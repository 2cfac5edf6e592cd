//! Translation of pivot labels into per-index trend modes.
//!
//! Index 0 takes the sign of its own pivot and index 1 the opposite sign.
//! From there the mode flips once after every pivot, so a pivot index still
//! belongs to the leg it ends. Labels are not checked for alternation: two
//! valleys in a row flip the mode twice.

use crate::error::{Error, Result};
use crate::pivots::label::{PivotLabel, TrendMode};
use crate::traits::ValidatedInput;

/// Writes the trend mode of every index of `pivots` into `output`.
///
/// # Errors
///
/// Returns an error if:
/// - `pivots` is empty (`Error::EmptyInput`)
/// - `pivots[0]` is [`PivotLabel::None`] (`Error::MissingInitialPivot`)
/// - The output buffer is too small (`Error::BufferTooSmall`)
pub fn pivots_to_modes_into(pivots: &[PivotLabel], output: &mut [TrendMode]) -> Result<()> {
    pivots.validate_not_empty()?;
    pivots.validate_output_len(output.len(), "pivots_to_modes")?;

    let Some(first) = TrendMode::from_label(pivots[0]) else {
        return Err(Error::MissingInitialPivot);
    };

    output[0] = first;
    let mut mode = first.flip();
    for (t, &label) in pivots.iter().enumerate().skip(1) {
        output[t] = mode;
        if label.is_pivot() {
            mode = mode.flip();
        }
    }
    Ok(())
}

/// Converts a pivot array into a trend mode array of the same length.
///
/// # Example
///
/// ```
/// use zigzag::{pivots_to_modes, TrendMode};
/// use zigzag::PivotLabel::{None as N, Peak as P, Valley as V};
///
/// let pivots = [V, N, P, N, V];
/// let modes = pivots_to_modes(&pivots).unwrap();
/// assert_eq!(
///     modes,
///     vec![TrendMode::Down, TrendMode::Up, TrendMode::Up, TrendMode::Down, TrendMode::Down]
/// );
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `pivots` is empty (`Error::EmptyInput`)
/// - `pivots[0]` is [`PivotLabel::None`] (`Error::MissingInitialPivot`)
pub fn pivots_to_modes(pivots: &[PivotLabel]) -> Result<Vec<TrendMode>> {
    let mut output = vec![TrendMode::Up; pivots.len()];
    pivots_to_modes_into(pivots, &mut output)?;
    Ok(output)
}
