//! Error types for zigzag.
//!
//! Every operation validates its preconditions before scanning and fails
//! fast with one of these variants. No partial result is ever returned.

use thiserror::Error;

/// The main error type for zigzag operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input data series is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// A reversal threshold has the wrong sign.
    ///
    /// Returned when `down_thresh > 0`. The up threshold is not sign-checked.
    #[error("invalid threshold {threshold} = {value}: {reason}")]
    InvalidThreshold {
        /// Name of the offending threshold (`"down_thresh"`).
        threshold: &'static str,
        /// The rejected value, widened to `f64`.
        value: f64,
        /// Description of the violated constraint.
        reason: &'static str,
    },

    /// Input series that must be aligned have different lengths.
    ///
    /// Returned by the candlestick scanner when close/high/low differ and by
    /// segment returns when the series and the pivot array differ.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Human readable description of the mismatched lengths.
        description: String,
    },

    /// The caller-provided output buffer is shorter than the input.
    #[error("buffer too small for {operation}: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// Name of the operation that rejected the buffer.
        operation: &'static str,
        /// Minimum buffer length.
        required: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// A pivot array does not start with a labeled pivot.
    ///
    /// Both scanners always label index 0, so this only happens with pivot
    /// arrays that did not come from a scanner.
    #[error("pivot array must start with a PEAK or VALLEY, found NONE at index 0")]
    MissingInitialPivot,

    /// An integer could not be interpreted as a pivot label.
    #[error("invalid pivot label {value}: expected -1, 0 or 1")]
    InvalidPivotLabel {
        /// The rejected raw value.
        value: i64,
    },

    /// Failed to convert a numeric value to the target element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the zigzag Error type.
pub type Result<T> = std::result::Result<T, Error>;
