use std::f64::consts::TAU;

use crate::config::AnimationConfig;
use crate::error::Result;

/// Animation timeline: `frames_per_cycle × periods` frames, one phase per
/// frame. The phase wraps modulo 2π at each period boundary while the
/// absolute frame index keeps advancing, so a multi-period animation keeps
/// extending the trace.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    phases: Vec<f64>,
    fps: u32,
    frames_per_cycle: usize,
    periods: usize,
}

impl Timeline {
    pub fn new(config: &AnimationConfig) -> Result<Self> {
        config.validate()?;
        let dt = TAU / config.frames_per_cycle as f64;
        let cycle: Vec<f64> = (0..config.frames_per_cycle)
            .map(|j| j as f64 * dt)
            .collect();

        let mut phases = Vec::with_capacity(config.frames_per_cycle * config.periods);
        for _ in 0..config.periods {
            phases.extend_from_slice(&cycle);
        }

        Ok(Self {
            phases,
            fps: config.fps,
            frames_per_cycle: config.frames_per_cycle,
            periods: config.periods,
        })
    }

    /// Total frame count across all periods.
    pub fn frame_count(&self) -> usize {
        self.phases.len()
    }

    /// Wrapped phase in [0, 2π) for the given absolute frame index.
    pub fn phase(&self, frame: usize) -> f64 {
        self.phases[frame]
    }

    /// All per-frame phases, in frame order.
    pub fn phases(&self) -> &[f64] {
        &self.phases
    }

    pub fn frames_per_cycle(&self) -> usize {
        self.frames_per_cycle
    }

    pub fn periods(&self) -> usize {
        self.periods
    }

    /// Wall-clock duration of the whole animation at the configured fps.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.fps as f64
    }

    /// Delay between frames in milliseconds.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps as f64
    }
}
