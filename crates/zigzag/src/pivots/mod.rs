//! Peak/valley pivot detection.
//!
//! - [`identify_initial_pivot`]: classify the first sample
//! - [`peak_valley_pivots`]: pivots of a single series
//! - [`peak_valley_pivots_candlestick`]: pivots of high/low/close data
//!
//! Both scanners run in one forward pass with O(1) extra state and label
//! every index with a [`PivotLabel`].

pub mod candlestick;
pub mod close;
pub mod initial;
pub mod label;
pub(crate) mod scanner;

pub use candlestick::{peak_valley_pivots_candlestick, peak_valley_pivots_candlestick_into};
pub use close::{peak_valley_pivots, peak_valley_pivots_into};
pub use initial::identify_initial_pivot;
pub use label::{labels_from_i8, labels_to_i8, PivotLabel, TrendMode};
