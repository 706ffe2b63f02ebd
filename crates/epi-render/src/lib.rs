//! Frame renderer for epi-core decompositions.
//!
//! Consumes the per-frame cumulative coordinates and radii produced by the
//! core pipeline and writes them out: SVG frame sequences for direct
//! viewing, JSON Lines for external animation loops. No algorithmic
//! content — everything geometric is decided upstream.

pub mod error;
pub mod frames;
pub mod svg;

pub use error::{RenderError, Result};
pub use frames::write_jsonl;
pub use svg::{SvgStyle, frame_svg, write_frames};
