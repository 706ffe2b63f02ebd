//! SVG rendering of per-frame epicycle geometry: nested circles, connecting
//! segments, and the traced curve on a dark background.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use epi_core::{Frame, FrameSeries};

use crate::error::Result;

/// Cosmetic parameters for SVG output.
#[derive(Clone, Debug)]
pub struct SvgStyle {
    /// Canvas width and height in pixels.
    pub size: u32,
    pub background: String,
    pub trace_color: String,
    pub circle_color: String,
    pub line_color: String,
    pub trace_width: f64,
    pub circle_width: f64,
    pub line_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            size: 720,
            background: "#000000".to_string(),
            trace_color: "#f23d4f".to_string(),
            circle_color: "#3a62f2".to_string(),
            line_color: "#ffffff".to_string(),
            trace_width: 2.5,
            circle_width: 2.0,
            line_width: 1.75,
        }
    }
}

/// Render one frame as a standalone SVG document. `bounds` is the world
/// extent to fit, typically `FrameSeries::bounds()` so the viewport stays
/// fixed across the whole animation.
pub fn frame_svg(frame: &Frame, bounds: ([f64; 2], [f64; 2]), style: &SvgStyle) -> String {
    let ([min_x, min_y], [max_x, max_y]) = bounds;
    let width = (max_x - min_x).max(f64::MIN_POSITIVE);
    let height = (max_y - min_y).max(f64::MIN_POSITIVE);
    // Uniform scale preserving aspect ratio, centered on the canvas.
    let scale = style.size as f64 / width.max(height);
    let offset_x = (style.size as f64 - width * scale) / 2.0;
    let offset_y = (style.size as f64 - height * scale) / 2.0;
    let sx = |x: f64| offset_x + (x - min_x) * scale;
    // SVG y grows downward.
    let sy = |y: f64| style.size as f64 - (offset_y + (y - min_y) * scale);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
        style.size
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        style.background
    );

    for circle in &frame.circles {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="0.5"/>"#,
            sx(circle.center[0]),
            sy(circle.center[1]),
            circle.radius * scale,
            style.circle_color,
            style.circle_width,
        );
    }

    for segment in &frame.segments {
        let _ = writeln!(
            svg,
            r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="{}" stroke-opacity="0.35"/>"#,
            sx(segment.from[0]),
            sy(segment.from[1]),
            sx(segment.to[0]),
            sy(segment.to[1]),
            style.line_color,
            style.line_width,
        );
    }

    if frame.trace.len() > 1 {
        let points: Vec<String> = frame
            .trace
            .iter()
            .map(|p| format!("{:.3},{:.3}", sx(p[0]), sy(p[1])))
            .collect();
        let _ = writeln!(
            svg,
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            points.join(" "),
            style.trace_color,
            style.trace_width,
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write the whole animation as numbered SVG files (`frame_00000.svg` …)
/// into `dir`, creating it if needed. Returns the number of frames written.
pub fn write_frames(dir: &Path, series: &FrameSeries, style: &SvgStyle) -> Result<usize> {
    fs::create_dir_all(dir)?;
    let bounds = series.bounds();

    let mut written = 0;
    for i in 0..series.frame_count() {
        // frame() only yields None past frame_count, which the loop excludes.
        let Some(frame) = series.frame(i) else { break };
        let path = dir.join(format!("frame_{i:05}.svg"));
        fs::write(&path, frame_svg(&frame, bounds, style))?;
        written += 1;
    }

    tracing::debug!("wrote {written} SVG frames to {}", dir.display());
    Ok(written)
}
