//! Core traits for zigzag numeric operations.
//!
//! [`SeriesElement`] abstracts over `f32` and `f64` samples and
//! [`ValidatedInput`] carries the precondition checks shared by every scan.
//!
//! # Example
//!
//! ```
//! use zigzag::traits::{SeriesElement, ValidatedInput};
//!
//! fn first_sample<T: SeriesElement>(data: &[T]) -> zigzag::Result<T> {
//!     data.validate_not_empty()?;
//!     Ok(data[0])
//! }
//!
//! assert_eq!(first_sample(&[2.5_f64, 3.0]).unwrap(), 2.5);
//! assert!(first_sample::<f64>(&[]).is_err());
//! ```

use std::fmt::Debug;

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as samples in a series.
///
/// Extends `num_traits::Float` with the conversions the scanners need. All
/// threshold arithmetic is performed in the element type so that `f32` and
/// `f64` callers get the comparison order they asked for.
pub trait SeriesElement:
    Float + NumCast + Copy + Default + Debug + Send + Sync + 'static
{
    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Widens the element to `f64` for error reporting.
    ///
    /// Values that cannot be widened are reported as NaN.
    #[inline]
    #[must_use]
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: Float + NumCast + Copy + Default + Debug + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating input data before a scan begins.
pub trait ValidatedInput {
    /// Returns the length of the input.
    fn len(&self) -> usize;

    /// Returns true if the input is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the input is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the input is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }

    /// Validates that an output buffer of `actual` elements can hold a result
    /// for this input.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `actual` is shorter than the input.
    #[inline]
    fn validate_output_len(&self, actual: usize, operation: &'static str) -> Result<()> {
        if actual < self.len() {
            Err(Error::BufferTooSmall {
                operation,
                required: self.len(),
                actual,
            })
        } else {
            Ok(())
        }
    }
}

impl<T> ValidatedInput for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> ValidatedInput for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Validates that the named series all have the same length.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` describing the first pair that differs.
pub fn validate_same_length(series: &[(&'static str, usize)]) -> Result<()> {
    if let Some(&(first_name, first_len)) = series.first() {
        for &(name, len) in &series[1..] {
            if len != first_len {
                return Err(Error::LengthMismatch {
                    description: format!(
                        "{first_name} has {first_len} elements, {name} has {len}"
                    ),
                });
            }
        }
    }
    Ok(())
}
