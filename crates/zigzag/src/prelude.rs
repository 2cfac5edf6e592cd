//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use zigzag::prelude::*;
//!
//! let prices = vec![1.0_f64, 1.05, 1.00, 0.90, 0.95, 1.10];
//!
//! let pivots = peak_valley_pivots(&prices, 0.03, -0.03).unwrap();
//! let modes = pivots_to_modes(&pivots).unwrap();
//! let drawdown = max_drawdown(&prices).unwrap();
//!
//! assert_eq!(pivots[0], PivotLabel::Valley);
//! assert_eq!(modes[0], TrendMode::Down);
//! assert!(drawdown > 0.14);
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Labels and thresholds
pub use crate::pivots::{PivotLabel, TrendMode};
pub use crate::threshold::Thresholds;

// Pivot detection
pub use crate::pivots::{
    identify_initial_pivot, peak_valley_pivots, peak_valley_pivots_candlestick,
    peak_valley_pivots_candlestick_into, peak_valley_pivots_into,
};

// Analytics
pub use crate::analytics::{
    max_drawdown, pivot_indices, pivots_to_modes, pivots_to_modes_into, segment_returns,
};

// Configuration
pub use crate::config::ZigZag;
