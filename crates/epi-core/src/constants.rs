/// Default animation frame rate (frames per second).
pub const DEFAULT_FPS: u32 = 60;

/// Default sampling density of the synthetic timeline: frames per period.
pub const DEFAULT_FRAMES_PER_CYCLE: usize = 360;

/// Default number of periods to animate.
pub const DEFAULT_PERIODS: usize = 2;

/// Relative tolerance on the DFT round trip. Deviations beyond
/// `RECONSTRUCTION_TOLERANCE * signal_scale` raise a numeric warning.
pub const RECONSTRUCTION_TOLERANCE: f64 = 1e-9;
