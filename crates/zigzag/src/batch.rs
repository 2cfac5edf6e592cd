//! Pivot detection over many independent series.
//!
//! With the `parallel` feature enabled, batches above a size threshold are
//! split across the rayon thread pool. Without it every call runs
//! sequentially with the same signature.
//!
//! ```toml
//! [dependencies]
//! zigzag = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use zigzag::batch::BatchProcessor;
//! use zigzag::peak_valley_pivots;
//!
//! let series = vec![
//!     vec![1.0_f64, 1.05, 1.00, 0.90, 0.95, 1.10],
//!     vec![5.0, 4.0, 3.0, 2.0, 1.0],
//! ];
//!
//! let results = BatchProcessor::new()
//!     .process(&series, |s| peak_valley_pivots(s, 0.03, -0.03))
//!     .unwrap();
//! assert_eq!(results.len(), 2);
//! ```

use crate::error::Result;
use crate::traits::SeriesElement;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use tracing::debug;

/// Batch processor applying one function to many series.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Batches with fewer series than this run sequentially.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a batch processor with a parallel threshold of 1000 series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: 1000,
        }
    }

    /// Sets the minimum number of series required to use parallel processing.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the configured parallel threshold.
    #[must_use]
    pub const fn get_min_parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    #[cfg(feature = "parallel")]
    fn is_parallel(&self, batch_len: usize) -> bool {
        batch_len >= self.min_parallel_threshold
    }

    /// Applies `scan_fn` to every series and collects the results in order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `scan_fn`.
    #[cfg(feature = "parallel")]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], scan_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if self.is_parallel(series.len()) {
            debug!(series = series.len(), "processing batch in parallel");
            series
                .par_iter()
                .map(|s| scan_fn(s))
                .collect::<Result<Vec<R>>>()
        } else {
            series.iter().map(|s| scan_fn(s)).collect()
        }
    }

    /// Applies `scan_fn` to every series and collects the results in order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `scan_fn`.
    #[cfg(not(feature = "parallel"))]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], scan_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R>,
    {
        series.iter().map(|s| scan_fn(s)).collect()
    }

    /// Like [`process`](Self::process), over borrowed slices.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `scan_fn`.
    #[cfg(feature = "parallel")]
    pub fn process_refs<T, F, R>(&self, series: &[&[T]], scan_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if self.is_parallel(series.len()) {
            debug!(series = series.len(), "processing batch in parallel");
            series
                .par_iter()
                .map(|s| scan_fn(s))
                .collect::<Result<Vec<R>>>()
        } else {
            series.iter().map(|s| scan_fn(s)).collect()
        }
    }

    /// Like [`process`](Self::process), over borrowed slices.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `scan_fn`.
    #[cfg(not(feature = "parallel"))]
    pub fn process_refs<T, F, R>(&self, series: &[&[T]], scan_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R>,
    {
        series.iter().map(|s| scan_fn(s)).collect()
    }

    /// Applies `scan_fn` to many `(close, high, low)` datasets.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `scan_fn`.
    #[cfg(feature = "parallel")]
    pub fn process_candles<T, F, R>(
        &self,
        datasets: &[(Vec<T>, Vec<T>, Vec<T>)],
        scan_fn: F,
    ) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T], &[T], &[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if self.is_parallel(datasets.len()) {
            debug!(series = datasets.len(), "processing candle batch in parallel");
            datasets
                .par_iter()
                .map(|(c, h, l)| scan_fn(c, h, l))
                .collect::<Result<Vec<R>>>()
        } else {
            datasets.iter().map(|(c, h, l)| scan_fn(c, h, l)).collect()
        }
    }

    /// Applies `scan_fn` to many `(close, high, low)` datasets.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `scan_fn`.
    #[cfg(not(feature = "parallel"))]
    pub fn process_candles<T, F, R>(
        &self,
        datasets: &[(Vec<T>, Vec<T>, Vec<T>)],
        scan_fn: F,
    ) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T], &[T], &[T]) -> Result<R>,
    {
        datasets.iter().map(|(c, h, l)| scan_fn(c, h, l)).collect()
    }
}

/// Shorthand for [`BatchProcessor::new`] followed by
/// [`process`](BatchProcessor::process).
///
/// # Errors
///
/// Returns the first error produced by `scan_fn`.
#[cfg(feature = "parallel")]
pub fn process_batch<T, F, R>(series: &[Vec<T>], scan_fn: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    F: Fn(&[T]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(series, scan_fn)
}

/// Shorthand for [`BatchProcessor::new`] followed by
/// [`process`](BatchProcessor::process).
///
/// # Errors
///
/// Returns the first error produced by `scan_fn`.
#[cfg(not(feature = "parallel"))]
pub fn process_batch<T, F, R>(series: &[Vec<T>], scan_fn: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    F: Fn(&[T]) -> Result<R>,
{
    BatchProcessor::new().process(series, scan_fn)
}
