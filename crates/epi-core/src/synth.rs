//! Epicycle synthesis: per-mode, per-frame contributions and their running
//! sums, the geometry the renderer consumes.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{EpicycleError, Result};
use crate::ordering::OrderedModes;
use crate::timeline::Timeline;

/// Per-mode, per-frame geometry for the whole animation, computed once at
/// setup. All matrices are `modes × frames`, indexed `[m][i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSeries {
    /// Per-mode contribution `Re(X'[m]·e^{i·m·t_i})`.
    pub x_p: Vec<Vec<f64>>,
    /// Per-mode contribution `Im(X'[m]·e^{i·m·t_i})`.
    pub y_p: Vec<Vec<f64>>,
    /// Running sum of `x_p` over the mode axis. Row `m` is the center of
    /// circle `m + 1`; the last row is the traced reconstruction.
    pub x_t: Vec<Vec<f64>>,
    /// Running sum of `y_p` over the mode axis.
    pub y_t: Vec<Vec<f64>>,
    /// Circle radii in sequence order.
    pub radii: Vec<f64>,
    /// Original frequency index behind each sequence position.
    pub original_indices: Vec<usize>,
}

/// Line segment between two consecutive circle centers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: [f64; 2],
    pub to: [f64; 2],
}

/// One epicycle at a fixed frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: [f64; 2],
    pub radius: f64,
}

/// Everything the renderer draws at one frame index: connecting segments,
/// circles, and the trace history up to and including this frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub index: usize,
    pub segments: Vec<Segment>,
    pub circles: Vec<Circle>,
    pub trace: Vec<[f64; 2]>,
}

/// Evaluate every kept mode over the timeline and accumulate positions.
///
/// The rotation rate at sequence position `m` is `m` itself, not the
/// mode's original frequency index — after reordering, nested-circle
/// motion is tied to nesting depth so it stays visually coherent. The
/// original index travels along in `original_indices` for anyone who
/// needs the spectral identity of a row.
///
/// `mode_count` limits the synthesis to the first `mode_count` ordered
/// modes; `None` keeps them all. Out-of-range requests are rejected.
pub fn synthesize(
    modes: &OrderedModes,
    timeline: &Timeline,
    mode_count: Option<usize>,
) -> Result<FrameSeries> {
    let available = modes.len();
    let m_count = mode_count.unwrap_or(available);
    if m_count < 1 || m_count > available {
        return Err(EpicycleError::ModeCountOutOfRange {
            requested: m_count,
            available,
        });
    }

    let phases = timeline.phases();
    let frames = phases.len();

    let mut x_p = vec![vec![0.0; frames]; m_count];
    let mut y_p = vec![vec![0.0; frames]; m_count];
    for m in 0..m_count {
        let coefficient = modes.coefficients[m];
        let rate = m as f64;
        for (i, &phase) in phases.iter().enumerate() {
            let z = coefficient * Complex64::from_polar(1.0, rate * phase);
            x_p[m][i] = z.re;
            y_p[m][i] = z.im;
        }
    }

    // Prefix sums over the mode axis, in ascending mode order so the
    // reduction is deterministic.
    let mut x_t = x_p.clone();
    let mut y_t = y_p.clone();
    for m in 1..m_count {
        for i in 0..frames {
            x_t[m][i] = x_t[m - 1][i] + x_p[m][i];
            y_t[m][i] = y_t[m - 1][i] + y_p[m][i];
        }
    }

    Ok(FrameSeries {
        x_p,
        y_p,
        x_t,
        y_t,
        radii: modes.radii[..m_count].to_vec(),
        original_indices: modes.original_indices[..m_count].to_vec(),
    })
}

impl FrameSeries {
    /// Number of synthesized modes.
    pub fn mode_count(&self) -> usize {
        self.x_p.len()
    }

    /// Number of animation frames.
    pub fn frame_count(&self) -> usize {
        self.x_p.first().map_or(0, Vec::len)
    }

    /// Reconstructed trace point at a frame: the full running sum.
    pub fn trace_point(&self, frame: usize) -> [f64; 2] {
        let last = self.mode_count() - 1;
        [self.x_t[last][frame], self.y_t[last][frame]]
    }

    /// Render contract for one frame: for each consecutive mode pair
    /// `(j, j+1)` a segment between their cumulative centers and a circle
    /// of radius `radii[j+1]` at center `j`, plus the trace so far.
    /// Returns `None` past the end of the timeline.
    pub fn frame(&self, index: usize) -> Option<Frame> {
        if index >= self.frame_count() {
            return None;
        }
        let m = self.mode_count();

        let mut segments = Vec::with_capacity(m.saturating_sub(1));
        let mut circles = Vec::with_capacity(m.saturating_sub(1));
        for j in 0..m.saturating_sub(1) {
            let center = [self.x_t[j][index], self.y_t[j][index]];
            segments.push(Segment {
                from: center,
                to: [self.x_t[j + 1][index], self.y_t[j + 1][index]],
            });
            circles.push(Circle {
                center,
                radius: self.radii[j + 1],
            });
        }

        let last = m - 1;
        let trace = (0..=index)
            .map(|i| [self.x_t[last][i], self.y_t[last][i]])
            .collect();

        Some(Frame {
            index,
            segments,
            circles,
            trace,
        })
    }

    /// Axis-aligned extent of the traced curve, padded by the largest
    /// non-anchor radius so every circle stays inside the viewport.
    /// Returns `(min, max)` corners.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let last = self.mode_count() - 1;
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for i in 0..self.frame_count() {
            let p = [self.x_t[last][i], self.y_t[last][i]];
            for axis in 0..2 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        let pad = self.radii.get(1).copied().unwrap_or(0.0);
        (
            [min[0] - pad, min[1] - pad],
            [max[0] + pad, max[1] + pad],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;
    use crate::ordering::order_modes;
    use approx::assert_abs_diff_eq;

    fn timeline(frames_per_cycle: usize, periods: usize) -> Timeline {
        Timeline::new(&AnimationConfig {
            fps: 60,
            frames_per_cycle,
            periods,
            modes: None,
        })
        .unwrap()
    }

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_matrix_dimensions() {
        let modes = order_modes(&[c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]);
        let series = synthesize(&modes, &timeline(40, 2), None).unwrap();
        assert_eq!(series.mode_count(), 3);
        assert_eq!(series.frame_count(), 80);
        assert_eq!(series.x_t.len(), 3);
        assert_eq!(series.y_t[2].len(), 80);
    }

    #[test]
    fn test_cumulative_sum_is_exact_prefix_sum() {
        let modes = order_modes(&[c(1.0, 2.0), c(-3.0, 0.5), c(0.2, -0.7), c(4.0, 4.0)]);
        let series = synthesize(&modes, &timeline(25, 1), None).unwrap();
        for i in 0..series.frame_count() {
            let mut running = 0.0;
            for m in 0..series.mode_count() {
                running += series.x_p[m][i];
                // Same addition order as the synthesizer, so equality is exact.
                assert_eq!(series.x_t[m][i], running, "mismatch at mode {m} frame {i}");
            }
        }
    }

    #[test]
    fn test_rotation_rate_is_sequence_position() {
        // Original index 2 dominates, so it lands at sequence position 1
        // and must rotate at rate 1, not 2.
        let coefficients = [c(0.0, 0.0), c(0.1, 0.0), c(5.0, 0.0)];
        let modes = order_modes(&coefficients);
        assert_eq!(modes.original_indices, vec![0, 2, 1]);

        let tl = timeline(16, 1);
        let series = synthesize(&modes, &tl, None).unwrap();
        let phase = tl.phase(3);
        let expected = coefficients[2] * Complex64::from_polar(1.0, 1.0 * phase);
        assert_abs_diff_eq!(series.x_p[1][3], expected.re, epsilon = 1e-12);
        assert_abs_diff_eq!(series.y_p[1][3], expected.im, epsilon = 1e-12);
    }

    #[test]
    fn test_mode_count_limits_rows() {
        let modes = order_modes(&[c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0)]);
        let series = synthesize(&modes, &timeline(10, 1), Some(2)).unwrap();
        assert_eq!(series.mode_count(), 2);
        assert_eq!(series.radii.len(), 2);
    }

    #[test]
    fn test_mode_count_out_of_range_rejected() {
        let modes = order_modes(&[c(1.0, 0.0), c(2.0, 0.0)]);
        let tl = timeline(10, 1);
        assert_eq!(
            synthesize(&modes, &tl, Some(0)).unwrap_err(),
            EpicycleError::ModeCountOutOfRange {
                requested: 0,
                available: 2
            }
        );
        assert!(synthesize(&modes, &tl, Some(3)).is_err());
    }

    #[test]
    fn test_frame_render_contract() {
        let modes = order_modes(&[c(1.0, 1.0), c(3.0, 0.0), c(0.0, 2.0)]);
        let series = synthesize(&modes, &timeline(12, 1), None).unwrap();

        let frame = series.frame(5).unwrap();
        assert_eq!(frame.index, 5);
        assert_eq!(frame.segments.len(), 2);
        assert_eq!(frame.circles.len(), 2);
        assert_eq!(frame.trace.len(), 6);

        // Circle j sits at cumulative center j with the next mode's radius.
        assert_eq!(frame.circles[0].center, [series.x_t[0][5], series.y_t[0][5]]);
        assert_eq!(frame.circles[0].radius, series.radii[1]);
        assert_eq!(frame.segments[1].to, [series.x_t[2][5], series.y_t[2][5]]);

        // Trace ends at the full reconstruction for this frame.
        assert_eq!(frame.trace[5], series.trace_point(5));
    }

    #[test]
    fn test_frame_out_of_range_is_none() {
        let modes = order_modes(&[c(1.0, 0.0), c(2.0, 0.0)]);
        let series = synthesize(&modes, &timeline(8, 1), None).unwrap();
        assert!(series.frame(8).is_none());
    }

    #[test]
    fn test_single_mode_frame_has_no_circles() {
        let modes = order_modes(&[c(1.0, 1.0)]);
        let series = synthesize(&modes, &timeline(8, 1), Some(1)).unwrap();
        let frame = series.frame(0).unwrap();
        assert!(frame.segments.is_empty());
        assert!(frame.circles.is_empty());
        assert_eq!(frame.trace.len(), 1);
    }

    #[test]
    fn test_anchor_row_is_constant() {
        // Sequence position 0 rotates at rate 0: the DC offset never moves.
        let modes = order_modes(&[c(2.5, -1.5), c(1.0, 0.0)]);
        let series = synthesize(&modes, &timeline(20, 2), None).unwrap();
        for i in 0..series.frame_count() {
            assert_abs_diff_eq!(series.x_p[0][i], 2.5, epsilon = 1e-12);
            assert_abs_diff_eq!(series.y_p[0][i], -1.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bounds_pad_by_largest_radius() {
        let modes = order_modes(&[c(0.0, 0.0), c(2.0, 0.0)]);
        let series = synthesize(&modes, &timeline(64, 1), None).unwrap();
        let (min, max) = series.bounds();
        // Unit-circle trace of radius 2 padded by radius 2.
        assert!(min[0] <= -4.0 + 1e-6 && max[0] >= 4.0 - 1e-6);
        assert!(min[1] <= -4.0 + 0.1 && max[1] >= 4.0 - 0.1);
    }
}
