//! zigzag: percentage-reversal peak and valley detection
//!
//! Labels every sample of a price series as a peak, a valley, or neither.
//! A pivot is confirmed once the series reverses away from it by a relative
//! threshold, so pivots always alternate and small wiggles are ignored.
//!
//! # Features
//!
//! - **Single pass**: O(n) time, O(1) extra state per scan
//! - **Candlesticks**: pivots placed on highs and lows, confirmed on closes
//! - **Analytics**: trend modes, segment returns and maximum drawdown
//! - **Generics**: works with both `f32` and `f64` data
//!
//! # Quick Start
//!
//! ```
//! use zigzag::{peak_valley_pivots, PivotLabel};
//!
//! let prices = vec![1.0_f64, 1.05, 1.00, 0.90, 0.95, 1.10];
//! let pivots = peak_valley_pivots(&prices, 0.03, -0.03).unwrap();
//!
//! assert_eq!(pivots[0], PivotLabel::Valley);
//! assert_eq!(pivots[1], PivotLabel::Peak);
//! assert_eq!(pivots[2], PivotLabel::None);
//! assert_eq!(pivots[3], PivotLabel::Valley);
//! ```
//!
//! # Error Handling
//!
//! Every operation validates its input before scanning:
//!
//! ```
//! use zigzag::{peak_valley_pivots, Error};
//!
//! // down_thresh must not be positive
//! let result = peak_valley_pivots(&[1.0_f64, 2.0], 0.1, 0.1);
//! assert!(matches!(result, Err(Error::InvalidThreshold { .. })));
//!
//! // Empty data
//! let empty: Vec<f64> = vec![];
//! assert!(matches!(peak_valley_pivots(&empty, 0.1, -0.1), Err(Error::EmptyInput)));
//! ```
//!
//! # Logging
//!
//! Scans emit `tracing` events at `debug` and `trace` level. Install a
//! subscriber to see them; without one they cost nothing.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod batch;
pub mod config;
pub mod error;
pub mod pivots;
pub mod prelude;
pub mod threshold;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use analytics::{
    max_drawdown, pivot_indices, pivots_to_modes, pivots_to_modes_into, segment_returns,
};
pub use config::ZigZag;
pub use error::{Error, Result};
pub use pivots::{
    identify_initial_pivot, labels_from_i8, labels_to_i8, peak_valley_pivots,
    peak_valley_pivots_candlestick, peak_valley_pivots_candlestick_into, peak_valley_pivots_into,
    PivotLabel, TrendMode,
};
pub use threshold::{validate_thresholds, Thresholds};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, approx_eq_relative, EPSILON, LOOSE_EPSILON};
