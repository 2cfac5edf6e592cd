//! Analytics derived from a price series or from its pivot labels.
//!
//! - [`max_drawdown`]: largest peak-to-trough relative decline
//! - [`pivots_to_modes`]: per-index trend direction between pivots
//! - [`segment_returns`]: relative return of each pivot-to-pivot leg

pub mod drawdown;
pub mod modes;
pub mod returns;

pub use drawdown::max_drawdown;
pub use modes::{pivots_to_modes, pivots_to_modes_into};
pub use returns::{pivot_indices, segment_returns};
