//! Built-in closed paths for demos and tests.

use std::f64::consts::TAU;

/// Heart curve: `x = 16 sin³t`, `y = 13cos t − 5cos 2t − 2cos 3t − cos 4t`,
/// sampled at `n` points over [0, 2π].
pub fn heart(n: usize) -> (Vec<f64>, Vec<f64>) {
    let step = TAU / (n.max(2) - 1) as f64;
    (0..n.max(2))
        .map(|i| {
            let t = i as f64 * step;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos();
            (x, y)
        })
        .unzip()
}

/// Axis-aligned square of half-width `half`, as the five-point closed
/// polyline starting and ending at the top-right corner.
pub fn square(half: f64) -> (Vec<f64>, Vec<f64>) {
    (
        vec![half, half, -half, -half, half],
        vec![half, -half, -half, half, half],
    )
}

/// Circle of the given radius centered at the origin, `n` points over
/// [0, 2π).
pub fn circle(radius: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let step = TAU / n.max(2) as f64;
    (0..n.max(2))
        .map(|i| {
            let t = i as f64 * step;
            (radius * t.cos(), radius * t.sin())
        })
        .unzip()
}
