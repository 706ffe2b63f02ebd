//! Full decomposition pipeline: raw path → samples → spectrum → ordered
//! modes → frame series. Runs once at setup; everything downstream reads
//! immutable arrays.

use std::fmt;

use num_complex::Complex64;

use crate::config::AnimationConfig;
use crate::constants::RECONSTRUCTION_TOLERANCE;
use crate::error::Result;
use crate::ordering::{OrderedModes, order_modes};
use crate::sampler::resample_path;
use crate::spectrum::{dft, reconstruction_error};
use crate::synth::{FrameSeries, synthesize};
use crate::timeline::Timeline;

/// Non-fatal diagnostic: the inverse transform failed to reproduce the
/// sampled path within tolerance. The animation is still usable — the
/// reconstruction is visually approximate for very sparse paths — but the
/// deviation should be surfaced, not swallowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericWarning {
    /// Largest absolute deviation across the round trip.
    pub max_deviation: f64,
    /// The threshold that was exceeded (already scaled to the signal).
    pub tolerance: f64,
}

impl fmt::Display for NumericWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round-trip reconstruction deviates by {:.3e} (tolerance {:.3e})",
            self.max_deviation, self.tolerance
        )
    }
}

/// One fully analyzed epicycle decomposition. Every intermediate artifact
/// is retained; all fields are pure functions of the input path and config.
#[derive(Clone, Debug)]
pub struct Epicycles {
    /// Time-uniform complex samples of the path, one period.
    pub samples: Vec<Complex64>,
    /// Raw DFT coefficients, index = frequency.
    pub coefficients: Vec<Complex64>,
    /// Coefficients in render order with radii and original indices.
    pub modes: OrderedModes,
    /// Frame timing across the configured periods.
    pub timeline: Timeline,
    /// Per-mode, per-frame geometry.
    pub series: FrameSeries,
    /// Numeric diagnostics raised during analysis.
    pub warnings: Vec<NumericWarning>,
}

/// Run the whole pipeline on one period of a closed path.
pub fn decompose(xvals: &[f64], yvals: &[f64], config: &AnimationConfig) -> Result<Epicycles> {
    config.validate()?;

    let samples = resample_path(xvals, yvals, config.frames_per_cycle)?;
    let coefficients = dft(&samples);

    let mut warnings = Vec::new();
    let scale = samples.iter().map(|s| s.norm()).fold(1.0, f64::max);
    let tolerance = RECONSTRUCTION_TOLERANCE * scale;
    let max_deviation = reconstruction_error(&samples, &coefficients);
    if max_deviation > tolerance {
        warnings.push(NumericWarning {
            max_deviation,
            tolerance,
        });
    }

    let modes = order_modes(&coefficients);
    let timeline = Timeline::new(config)?;
    let series = synthesize(&modes, &timeline, config.modes)?;

    Ok(Epicycles {
        samples,
        coefficients,
        modes,
        timeline,
        series,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes;
    use approx::assert_abs_diff_eq;

    fn config(frames_per_cycle: usize) -> AnimationConfig {
        AnimationConfig {
            fps: 60,
            frames_per_cycle,
            periods: 1,
            modes: None,
        }
    }

    #[test]
    fn test_pipeline_retains_artifacts() {
        let (x, y) = shapes::circle(3.0, 64);
        let result = decompose(&x, &y, &config(64)).unwrap();
        assert_eq!(result.samples.len(), 64);
        assert_eq!(result.coefficients.len(), 64);
        assert_eq!(result.timeline.frame_count(), 64);
        assert_eq!(result.series.frame_count(), 64);
    }

    #[test]
    fn test_clean_transform_has_no_warnings() {
        let (x, y) = shapes::circle(1.0, 32);
        let result = decompose(&x, &y, &config(32)).unwrap();
        assert!(
            result.warnings.is_empty(),
            "unexpected warnings: {:?}",
            result.warnings
        );
    }

    #[test]
    fn test_idempotent_and_bit_identical() {
        let (x, y) = shapes::heart(100);
        let a = decompose(&x, &y, &config(120)).unwrap();
        let b = decompose(&x, &y, &config(120)).unwrap();
        assert_eq!(a.samples, b.samples);
        assert_eq!(a.coefficients, b.coefficients);
        assert_eq!(a.series, b.series);
    }

    #[test]
    fn test_frame_zero_reconstruction_equals_first_sample() {
        // At phase 0 every rotation factor is 1, so the full running sum
        // collapses to the plain coefficient sum: the first sample.
        let (x, y) = shapes::square(1.0);
        let result = decompose(&x, &y, &config(60)).unwrap();
        let [tx, ty] = result.series.trace_point(0);
        assert_abs_diff_eq!(tx, result.samples[0].re, epsilon = 1e-9);
        assert_abs_diff_eq!(ty, result.samples[0].im, epsilon = 1e-9);
        assert_abs_diff_eq!(tx, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ty, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_config_rejected_before_numeric_work() {
        let (x, y) = shapes::square(1.0);
        let bad = AnimationConfig {
            periods: 0,
            ..config(60)
        };
        assert!(decompose(&x, &y, &bad).is_err());
    }
}
