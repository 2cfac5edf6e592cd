//! Zero-config entry point.

use crate::analytics::pivots_to_modes;
use crate::error::Result;
use crate::pivots::{peak_valley_pivots, peak_valley_pivots_candlestick, PivotLabel, TrendMode};
use crate::threshold::validate_thresholds;
use crate::traits::SeriesElement;

/// Pivot detection with a reusable threshold configuration.
///
/// Thresholds are stored as `f64` and converted to the element type of each
/// call.
///
/// # Example
///
/// ```
/// use zigzag::{PivotLabel, ZigZag};
///
/// let prices = [1.0_f64, 1.05, 1.00, 0.90, 0.95, 1.10];
///
/// // Use defaults (0.03, -0.03)
/// let pivots = ZigZag::default().pivots(&prices).unwrap();
/// assert_eq!(pivots[3], PivotLabel::Valley);
///
/// // Or customize with fluent API
/// let pivots = ZigZag::new()
///     .up_thresh(0.2)
///     .down_thresh(-0.2)
///     .pivots(&prices)
///     .unwrap();
/// // Only the rally off 0.90 reaches 20%, so the first sample sits above a valley.
/// assert_eq!(pivots[0], PivotLabel::Peak);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZigZag {
    up_thresh: f64,
    down_thresh: f64,
}

impl Default for ZigZag {
    /// Creates a configuration with symmetric 3% thresholds.
    fn default() -> Self {
        Self {
            up_thresh: 0.03,
            down_thresh: -0.03,
        }
    }
}

impl ZigZag {
    /// Creates a configuration with symmetric 3% thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the relative rise that confirms a valley.
    ///
    /// Default: 0.03
    #[must_use]
    pub const fn up_thresh(mut self, up_thresh: f64) -> Self {
        self.up_thresh = up_thresh;
        self
    }

    /// Sets the relative fall that confirms a peak. Must be `<= 0`.
    ///
    /// Default: -0.03
    #[must_use]
    pub const fn down_thresh(mut self, down_thresh: f64) -> Self {
        self.down_thresh = down_thresh;
        self
    }

    /// Validates the configured thresholds.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidThreshold` if `down_thresh > 0`.
    pub fn validate(&self) -> Result<()> {
        validate_thresholds(self.up_thresh, self.down_thresh)
    }

    fn thresholds<T: SeriesElement>(&self) -> Result<(T, T)> {
        Ok((T::from_f64(self.up_thresh)?, T::from_f64(self.down_thresh)?))
    }

    /// Finds the pivots of a single series.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input data is empty
    /// - `down_thresh > 0`
    /// - A threshold cannot be represented in `T`
    pub fn pivots<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<PivotLabel>> {
        let (up, down) = self.thresholds()?;
        peak_valley_pivots(data, up, down)
    }

    /// Finds the pivots of high/low/close data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input data is empty
    /// - The three series differ in length
    /// - `down_thresh > 0`
    /// - A threshold cannot be represented in `T`
    pub fn pivots_candlestick<T: SeriesElement>(
        &self,
        close: &[T],
        high: &[T],
        low: &[T],
    ) -> Result<Vec<PivotLabel>> {
        let (up, down) = self.thresholds()?;
        peak_valley_pivots_candlestick(close, high, low, up, down)
    }

    /// Finds the pivots of a single series and translates them into trend modes.
    ///
    /// # Errors
    ///
    /// Same as [`pivots`](Self::pivots).
    pub fn modes<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<TrendMode>> {
        let pivots = self.pivots(data)?;
        pivots_to_modes(&pivots)
    }

    /// Returns the up threshold.
    #[must_use]
    pub const fn get_up_thresh(&self) -> f64 {
        self.up_thresh
    }

    /// Returns the down threshold.
    #[must_use]
    pub const fn get_down_thresh(&self) -> f64 {
        self.down_thresh
    }
}
