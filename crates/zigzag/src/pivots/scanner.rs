//! The pivot state machine shared by the close and candlestick scanners.
//!
//! The scanner keeps one pending candidate pivot and a two-state trend:
//!
//! - `Down`: searching for a valley. A close that rises `up_thresh` above the
//!   candidate's close confirms it as a valley and switches to `Up`; a lower
//!   low replaces the candidate.
//! - `Up`: searching for a peak. A close that falls `down_thresh` below the
//!   candidate's close confirms it as a peak and switches to `Down`; a higher
//!   high replaces the candidate.
//!
//! Candidates are ranked by high or low, crossings are measured close to
//! close. For a plain series close, high and low are the same sample.

use tracing::{debug, trace};

use crate::pivots::initial::classify_initial;
use crate::pivots::label::{PivotLabel, TrendMode};
use crate::threshold::Thresholds;
use crate::traits::SeriesElement;

/// Aligned price columns seen by the state machine.
pub(crate) trait PriceSource<T: SeriesElement> {
    /// Number of bars.
    fn len(&self) -> usize;
    /// Series used for initial classification and threshold crossings.
    fn closes(&self) -> &[T];
    /// Value a peak candidate is measured at.
    fn high(&self, t: usize) -> T;
    /// Value a valley candidate is measured at.
    fn low(&self, t: usize) -> T;
}

/// A single series acting as close, high and low at once.
pub(crate) struct SingleSeries<'a, T>(pub(crate) &'a [T]);

impl<T: SeriesElement> PriceSource<T> for SingleSeries<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn closes(&self) -> &[T] {
        self.0
    }

    #[inline]
    fn high(&self, t: usize) -> T {
        self.0[t]
    }

    #[inline]
    fn low(&self, t: usize) -> T {
        self.0[t]
    }
}

/// Separate close, high and low series of equal length.
pub(crate) struct Candles<'a, T> {
    pub(crate) close: &'a [T],
    pub(crate) high: &'a [T],
    pub(crate) low: &'a [T],
}

impl<T: SeriesElement> PriceSource<T> for Candles<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.close.len()
    }

    #[inline]
    fn closes(&self) -> &[T] {
        self.close
    }

    #[inline]
    fn high(&self, t: usize) -> T {
        self.high[t]
    }

    #[inline]
    fn low(&self, t: usize) -> T {
        self.low[t]
    }
}

/// Runs the state machine over validated input.
///
/// `prices` must be non-empty and `output` at least as long as `prices`.
/// Only `output[..prices.len()]` is written.
pub(crate) fn scan_into<T, P>(
    prices: &P,
    thresholds: &Thresholds<T>,
    output: &mut [PivotLabel],
    operation: &'static str,
) where
    T: SeriesElement,
    P: PriceSource<T>,
{
    let n = prices.len();
    let close = prices.closes();
    let output = &mut output[..n];
    output.fill(PivotLabel::None);

    let initial = classify_initial(close, thresholds);
    trace!(operation, len = n, initial = %initial, "classified initial pivot");
    output[0] = initial;

    let up_factor = thresholds.up_factor();
    let down_factor = thresholds.down_factor();

    let mut trend = match initial {
        PivotLabel::Peak => TrendMode::Down,
        _ => TrendMode::Up,
    };
    let mut last_pivot_t = 0_usize;
    let mut last_pivot_x = close[0];
    let mut last_pivot_close = close[0];
    let mut confirmed = 0_usize;

    for t in 1..n {
        let r = close[t] / last_pivot_close;
        match trend {
            TrendMode::Down => {
                if r >= up_factor {
                    output[last_pivot_t] = trend.terminal_label();
                    confirmed += 1;
                    trend = TrendMode::Up;
                    last_pivot_t = t;
                    last_pivot_x = prices.high(t);
                    last_pivot_close = close[t];
                } else {
                    let low = prices.low(t);
                    if low < last_pivot_x {
                        last_pivot_t = t;
                        last_pivot_x = low;
                        last_pivot_close = close[t];
                    }
                }
            }
            TrendMode::Up => {
                if r <= down_factor {
                    output[last_pivot_t] = trend.terminal_label();
                    confirmed += 1;
                    trend = TrendMode::Down;
                    last_pivot_t = t;
                    last_pivot_x = prices.low(t);
                    last_pivot_close = close[t];
                } else {
                    let high = prices.high(t);
                    if high > last_pivot_x {
                        last_pivot_t = t;
                        last_pivot_x = high;
                        last_pivot_close = close[t];
                    }
                }
            }
        }
    }

    // The final sample is always labeled, even when the move into it never
    // reached a threshold.
    let last = n - 1;
    if last_pivot_t == last {
        output[last] = trend.terminal_label();
    } else if output[last] == PivotLabel::None {
        output[last] = trend.flip().terminal_label();
    }

    debug!(operation, len = n, confirmed, final_trend = %trend, "pivot scan finished");
}
