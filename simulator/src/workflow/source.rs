use anyhow::Context;
use lidarcore::interface::DetectionFrame;
use std::fs;
use std::path::Path;

/// Reads recorded frames stored as a JSON array of `DetectionFrame`.
pub fn load_frames<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<DetectionFrame>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading detection frames {}", path_ref.display()))?;
    let frames: Vec<DetectionFrame> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing detection frames {}", path_ref.display()))?;
    Ok(frames)
}
