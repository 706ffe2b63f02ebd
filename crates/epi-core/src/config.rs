use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FPS, DEFAULT_FRAMES_PER_CYCLE, DEFAULT_PERIODS};
use crate::error::{EpicycleError, Result};

/// Immutable animation parameters, passed explicitly into each stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Playback rate in frames per second.
    pub fps: u32,
    /// Frames per period of the reconstruction. Also the DFT length:
    /// the path is resampled to exactly this many points.
    pub frames_per_cycle: usize,
    /// Number of periods the timeline spans.
    pub periods: usize,
    /// Number of ordered modes to animate. `None` means all kept modes.
    pub modes: Option<usize>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            frames_per_cycle: DEFAULT_FRAMES_PER_CYCLE,
            periods: DEFAULT_PERIODS,
            modes: None,
        }
    }
}

impl AnimationConfig {
    /// Reject zero-valued fields before any numeric work.
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(EpicycleError::DegenerateConfig { field: "fps" });
        }
        if self.frames_per_cycle == 0 {
            return Err(EpicycleError::DegenerateConfig {
                field: "frames_per_cycle",
            });
        }
        if self.periods == 0 {
            return Err(EpicycleError::DegenerateConfig { field: "periods" });
        }
        if self.modes == Some(0) {
            return Err(EpicycleError::ModeCountOutOfRange {
                requested: 0,
                available: self.frames_per_cycle,
            });
        }
        Ok(())
    }
}
