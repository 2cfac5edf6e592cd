//! Python bindings for zigzag pivot detection.
//!
//! Exposes the scanners and analytics of the `zigzag` crate through `PyO3`
//! with `NumPy` arrays in and out. Pivot and mode arrays are returned as
//! `int8` arrays using `1` for peaks/up-moves and `-1` for valleys/down-moves.
//!
//! Inputs accept anything `numpy.asarray` does: lists, arrays of another
//! dtype and strided views are converted to `float64` (prices) or `int8`
//! (pivots) before the scan.

// These are intentional patterns for PyO3 FFI code
#![allow(clippy::needless_pass_by_value)] // PyO3 requires pass-by-value for Python interop

use std::borrow::Cow;

use numpy::ndarray::ArrayView1;
use numpy::{AllowTypeChange, Element, PyArray1, PyArrayLike1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use zigzag::{labels_from_i8, labels_to_i8, PivotLabel, TrendMode};

/// Price input coerced to `float64`.
type Prices<'py> = PyArrayLike1<'py, f64, AllowTypeChange>;

/// Pivot input coerced to `int8`.
type Pivots<'py> = PyArrayLike1<'py, i8, AllowTypeChange>;

/// Convert zigzag error to Python `ValueError`
fn to_py_err(e: zigzag::Error) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Borrow a contiguous view as a slice, copying strided views.
fn contiguous<'a, T: Element + Clone>(view: ArrayView1<'a, T>) -> Cow<'a, [T]> {
    match view.to_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(view.to_vec()),
    }
}

/// Classify the first sample as a peak (1) or a valley (-1).
///
/// Args:
///     data: Input price array (array-like, converted to float64)
///     up_thresh: Minimum relative rise that confirms a valley (e.g. 0.05)
///     down_thresh: Minimum relative fall that confirms a peak (e.g. -0.05)
///
/// Returns:
///     1 or -1
#[pyfunction]
fn identify_initial_pivot(
    data: Prices<'_>,
    up_thresh: f64,
    down_thresh: f64,
) -> PyResult<i8> {
    let input = contiguous(data.as_array());
    let label = zigzag::identify_initial_pivot(&input, up_thresh, down_thresh).map_err(to_py_err)?;
    Ok(label.as_i8())
}

/// Peak/valley pivots of a price series.
///
/// Args:
///     data: Input price array (array-like, converted to float64)
///     up_thresh: Minimum relative rise that confirms a valley (e.g. 0.05)
///     down_thresh: Minimum relative fall that confirms a peak (e.g. -0.05)
///
/// Returns:
///     `NumPy` int8 array of 1 (peak), -1 (valley) and 0
#[pyfunction]
fn peak_valley_pivots<'py>(
    py: Python<'py>,
    data: Prices<'py>,
    up_thresh: f64,
    down_thresh: f64,
) -> PyResult<Bound<'py, PyArray1<i8>>> {
    let input = contiguous(data.as_array());
    let pivots = zigzag::peak_valley_pivots(&input, up_thresh, down_thresh).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, labels_to_i8(&pivots)))
}

/// Peak/valley pivots placed on candle highs and lows.
///
/// Peaks are located at highs and valleys at lows; thresholds are checked
/// against the close.
///
/// Args:
///     close: Close prices
///     high: High prices
///     low: Low prices
///     up_thresh: Minimum relative rise that confirms a valley
///     down_thresh: Minimum relative fall that confirms a peak
///
/// Returns:
///     `NumPy` int8 array of 1 (peak), -1 (valley) and 0
#[pyfunction]
fn peak_valley_pivots_candlestick<'py>(
    py: Python<'py>,
    close: Prices<'py>,
    high: Prices<'py>,
    low: Prices<'py>,
    up_thresh: f64,
    down_thresh: f64,
) -> PyResult<Bound<'py, PyArray1<i8>>> {
    let pivots = zigzag::peak_valley_pivots_candlestick(
        &contiguous(close.as_array()),
        &contiguous(high.as_array()),
        &contiguous(low.as_array()),
        up_thresh,
        down_thresh,
    )
    .map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, labels_to_i8(&pivots)))
}

/// Maximum peak-to-trough drawdown.
///
/// Args:
///     data: Input value array (array-like, converted to float64)
///
/// Returns:
///     Largest relative decline from a running peak, as a float
#[pyfunction]
fn max_drawdown(data: Prices<'_>) -> PyResult<f64> {
    zigzag::max_drawdown(&contiguous(data.as_array())).map_err(to_py_err)
}

/// Trend mode of every sample.
///
/// Args:
///     pivots: Pivot array as returned by `peak_valley_pivots` (converted to int8)
///
/// Returns:
///     `NumPy` int8 array of 1 (rising) and -1 (falling)
#[pyfunction]
fn pivots_to_modes<'py>(
    py: Python<'py>,
    pivots: Pivots<'py>,
) -> PyResult<Bound<'py, PyArray1<i8>>> {
    let labels = labels_from_i8(&contiguous(pivots.as_array())).map_err(to_py_err)?;
    let modes = zigzag::pivots_to_modes(&labels).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(
        py,
        modes.into_iter().map(TrendMode::as_i8).collect(),
    ))
}

/// Relative return of each pivot-to-pivot segment.
///
/// Args:
///     data: Input price array (array-like, converted to float64)
///     pivots: Pivot array of the same length (converted to int8)
///
/// Returns:
///     `NumPy` array of `v[i+1] / v[i] - 1` over the pivot values
#[pyfunction]
fn compute_segment_returns<'py>(
    py: Python<'py>,
    data: Prices<'py>,
    pivots: Pivots<'py>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let labels = labels_from_i8(&contiguous(pivots.as_array())).map_err(to_py_err)?;
    let returns =
        zigzag::segment_returns(&contiguous(data.as_array()), &labels).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, returns))
}

/// Python module definition
#[pymodule]
fn _zigzag(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("PEAK", PivotLabel::Peak.as_i8())?;
    m.add("VALLEY", PivotLabel::Valley.as_i8())?;

    m.add_function(wrap_pyfunction!(identify_initial_pivot, m)?)?;
    m.add_function(wrap_pyfunction!(peak_valley_pivots, m)?)?;
    m.add_function(wrap_pyfunction!(peak_valley_pivots_candlestick, m)?)?;
    m.add_function(wrap_pyfunction!(max_drawdown, m)?)?;
    m.add_function(wrap_pyfunction!(pivots_to_modes, m)?)?;
    m.add_function(wrap_pyfunction!(compute_segment_returns, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use numpy::ndarray::{array, s};

    #[test]
    fn test_contiguous_view_is_borrowed() {
        let data = array![1.0_f64, 1.05, 1.0];
        let view = contiguous(data.view());
        assert!(matches!(view, Cow::Borrowed(_)));
        assert_eq!(&*view, &[1.0, 1.05, 1.0]);
    }

    #[test]
    fn test_strided_view_is_copied() {
        let data = array![1.0_f64, 9.0, 1.05, 9.0, 0.9, 9.0, 1.1];
        let view = contiguous(data.slice(s![..;2]));
        assert!(matches!(view, Cow::Owned(_)));
        assert_eq!(&*view, &[1.0, 1.05, 0.9, 1.1]);
    }

    #[test]
    fn test_reversed_view_keeps_logical_order() {
        let pivots = array![1_i8, 0, -1];
        let view = contiguous(pivots.slice(s![..;-1]));
        assert_eq!(&*view, &[-1, 0, 1]);
    }
}
