//! Shared test utilities for zigzag tests.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Approximate equality check for floating-point values.
///
/// Two NaN values are considered equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Geometric random walk starting at `start`, with per-step returns drawn
/// uniformly from `[-step, step)`.
#[allow(dead_code)]
pub fn random_walk(seed: u64, len: usize, start: f64, step: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut price = start;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(price);
        price *= 1.0 + rng.gen_range(-step..step);
    }
    out
}

/// Random candles around a random walk: `(close, high, low)` with
/// `low <= close <= high`.
#[allow(dead_code)]
pub fn random_candles(seed: u64, len: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let close = random_walk(seed, len, 100.0, 0.02);
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5EED);
    let mut high = Vec::with_capacity(len);
    let mut low = Vec::with_capacity(len);
    for &c in &close {
        high.push(c * (1.0 + rng.gen_range(0.0..0.01)));
        low.push(c * (1.0 - rng.gen_range(0.0..0.01)));
    }
    (close, high, low)
}

/// Straightforward initial-pivot classifier over `f64`, using `-1/1` labels.
#[allow(dead_code)]
pub fn reference_initial(x: &[f64], up: f64, down: f64) -> i8 {
    let n = x.len();
    let mut max_x = x[0];
    let mut min_x = x[0];
    let mut max_t = 0;
    let mut min_t = 0;
    for t in 1..n {
        let x_t = x[t];
        if x_t / min_x >= 1.0 + up {
            return if min_t == 0 { -1 } else { 1 };
        }
        if x_t / max_x <= 1.0 + down {
            return if max_t == 0 { 1 } else { -1 };
        }
        if x_t > max_x {
            max_x = x_t;
            max_t = t;
        }
        if x_t < min_x {
            min_x = x_t;
            min_t = t;
        }
    }
    if x[0] < x[n - 1] {
        -1
    } else {
        1
    }
}

/// Straightforward high/low/close zigzag with an integer trend, returning
/// `-1/0/1` labels. Pass the same series three times for the close-only
/// scanner.
#[allow(dead_code)]
pub fn reference_pivots_hlc(
    close: &[f64],
    high: &[f64],
    low: &[f64],
    up: f64,
    down: f64,
) -> Vec<i8> {
    let n = close.len();
    let initial = reference_initial(close, up, down);
    let mut pivots = vec![0_i8; n];
    pivots[0] = initial;

    let mut trend = -initial;
    let mut last_t = 0;
    let mut last_x = close[0];

    for t in 1..n {
        // Crossings compare closes; the candidate's close is close[last_t].
        let r = close[t] / close[last_t];
        if trend == -1 {
            if r >= 1.0 + up {
                pivots[last_t] = trend;
                trend = 1;
                last_t = t;
                last_x = high[t];
            } else if low[t] < last_x {
                last_t = t;
                last_x = low[t];
            }
        } else if r <= 1.0 + down {
            pivots[last_t] = trend;
            trend = -1;
            last_t = t;
            last_x = low[t];
        } else if high[t] > last_x {
            last_t = t;
            last_x = high[t];
        }
    }

    if last_t == n - 1 {
        pivots[last_t] = trend;
    } else if pivots[n - 1] == 0 {
        pivots[n - 1] = -trend;
    }
    pivots
}

/// Close-only form of [`reference_pivots_hlc`].
#[allow(dead_code)]
pub fn reference_pivots(x: &[f64], up: f64, down: f64) -> Vec<i8> {
    reference_pivots_hlc(x, x, x, up, down)
}
