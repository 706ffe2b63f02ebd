//! Path resampling: an arbitrary-density closed polyline becomes a fixed
//! number of time-uniform complex samples suitable for the DFT.

use std::f64::consts::TAU;

use num_complex::Complex64;

use crate::error::{EpicycleError, Result};

/// Resample one period of a closed path onto `frames` parameter-uniform
/// complex samples (real = x, imaginary = y).
///
/// The input points are placed on a parametric grid of step
/// `2π / len(xvals)` over [0, 2π); x and y are linearly interpolated
/// independently onto the target grid of step `2π / frames`. When the two
/// grids don't line up the interpolation may alias fine detail — that is
/// accepted, not an error.
pub fn resample_path(xvals: &[f64], yvals: &[f64], frames: usize) -> Result<Vec<Complex64>> {
    if xvals.len() != yvals.len() {
        return Err(EpicycleError::ShapeMismatch {
            x_len: xvals.len(),
            y_len: yvals.len(),
        });
    }
    if xvals.len() < 2 {
        return Err(EpicycleError::TooFewPoints {
            points: xvals.len(),
        });
    }
    if frames == 0 {
        return Err(EpicycleError::DegenerateConfig {
            field: "frames_per_cycle",
        });
    }
    for (i, (x, y)) in xvals.iter().zip(yvals).enumerate() {
        if !x.is_finite() || !y.is_finite() {
            return Err(EpicycleError::NonFinitePoint { index: i });
        }
    }

    let n = xvals.len();
    let dt = TAU / n as f64;
    let grid: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();

    let dt_anim = TAU / frames as f64;
    let samples = (0..frames)
        .map(|j| {
            let t = j as f64 * dt_anim;
            Complex64::new(interp_linear(t, &grid, xvals), interp_linear(t, &grid, yvals))
        })
        .collect();

    Ok(samples)
}

/// Piecewise-linear table lookup over an ascending grid, clamped at both
/// ends (the wrap segment past the last grid point holds the last value).
fn interp_linear(t: f64, grid: &[f64], values: &[f64]) -> f64 {
    let last = grid.len() - 1;
    if t <= grid[0] {
        return values[0];
    }
    if t >= grid[last] {
        return values[last];
    }
    // First index with grid[hi] > t; lo brackets from below.
    let hi = grid.partition_point(|&g| g <= t);
    let lo = hi - 1;
    let w = (t - grid[lo]) / (grid[hi] - grid[lo]);
    values[lo] + w * (values[hi] - values[lo])
}
