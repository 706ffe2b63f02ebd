//! JSON Lines export of the per-frame render contract: one `Frame` per
//! line, the machine-readable feed for external animation loops.

use std::io::Write;

use epi_core::FrameSeries;

use crate::error::Result;

/// Serialize every frame of the series to `writer`, one JSON object per
/// line, in frame order. Returns the number of frames written.
pub fn write_jsonl<W: Write>(mut writer: W, series: &FrameSeries) -> Result<usize> {
    let mut written = 0;
    for i in 0..series.frame_count() {
        let Some(frame) = series.frame(i) else { break };
        serde_json::to_writer(&mut writer, &frame)?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    tracing::debug!("serialized {written} frames");
    Ok(written)
}
