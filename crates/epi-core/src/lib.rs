//! Epicycle decomposition engine.
//!
//! Reconstructs an arbitrary closed 2D curve as a sum of rotating vectors:
//! the path is resampled to a fixed frame count, transformed with a direct
//! DFT, the modes are reordered largest-circle-first, and the inverse
//! relationship is evaluated per mode and per frame into cumulative
//! positions for nested circles, connecting segments, and the traced curve.
//!
//! Zero I/O — pure math engine with no opinions about rendering or output.

pub mod config;
pub mod constants;
pub mod error;
pub mod ordering;
pub mod pipeline;
pub mod sampler;
pub mod shapes;
pub mod spectrum;
pub mod synth;
pub mod timeline;

pub use config::AnimationConfig;
pub use constants::{
    DEFAULT_FPS, DEFAULT_FRAMES_PER_CYCLE, DEFAULT_PERIODS, RECONSTRUCTION_TOLERANCE,
};
pub use error::{EpicycleError, Result};
pub use ordering::{OrderedModes, order_modes};
pub use pipeline::{Epicycles, NumericWarning, decompose};
pub use sampler::resample_path;
pub use spectrum::{dft, inverse_dft, reconstruction_error};
pub use synth::{Circle, Frame, FrameSeries, Segment, synthesize};
pub use timeline::Timeline;
