//! Reversal thresholds.
//!
//! A pivot is confirmed once the series moves away from the current
//! candidate by a relative amount:
//!
//! ```text
//! x / candidate >= 1 + up_thresh      (rise out of a valley)
//! x / candidate <= 1 + down_thresh    (fall out of a peak)
//! ```
//!
//! The comparison is always a ratio against `1 + threshold`, never a
//! rearranged difference, so results are reproducible bit for bit.

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// A validated pair of reversal thresholds.
///
/// `down_thresh` must be `<= 0`; zero means any decline counts. `up_thresh`
/// is taken as given and is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds<T> {
    up: T,
    down: T,
}

impl<T: SeriesElement> Thresholds<T> {
    /// Validates and wraps a threshold pair.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidThreshold` if `down_thresh > 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use zigzag::Thresholds;
    ///
    /// assert!(Thresholds::new(0.05_f64, -0.05).is_ok());
    /// assert!(Thresholds::new(0.05_f64, 0.0).is_ok());
    /// assert!(Thresholds::new(0.05_f64, 0.05).is_err());
    /// ```
    pub fn new(up_thresh: T, down_thresh: T) -> Result<Self> {
        validate_thresholds(up_thresh, down_thresh)?;
        Ok(Self {
            up: up_thresh,
            down: down_thresh,
        })
    }

    /// Returns the relative rise required to confirm a valley.
    #[inline]
    #[must_use]
    pub fn up(&self) -> T {
        self.up
    }

    /// Returns the relative fall required to confirm a peak.
    #[inline]
    #[must_use]
    pub fn down(&self) -> T {
        self.down
    }

    /// `1 + up_thresh`, the ratio a rise must reach.
    #[inline]
    #[must_use]
    pub fn up_factor(&self) -> T {
        T::one() + self.up
    }

    /// `1 + down_thresh`, the ratio a fall must reach.
    #[inline]
    #[must_use]
    pub fn down_factor(&self) -> T {
        T::one() + self.down
    }
}

/// Checks the threshold sign contract without building a [`Thresholds`].
///
/// NaN thresholds pass, since `NaN > 0` is false.
///
/// # Errors
///
/// Returns `Error::InvalidThreshold` if `down_thresh > 0`.
#[inline]
pub fn validate_thresholds<T: SeriesElement>(_up_thresh: T, down_thresh: T) -> Result<()> {
    if down_thresh > T::zero() {
        return Err(Error::InvalidThreshold {
            threshold: "down_thresh",
            value: down_thresh.to_f64_lossy(),
            reason: "down_thresh must not be positive",
        });
    }
    Ok(())
}
