//! Recorded detector output.
//!
//! A snapshot file is a JSON array of [`FaceDetection`]s for one image.
//! A session file is JSON Lines with one [`FrameRecord`] per frame in
//! presentation order. Lines starting with `#` are comments.

use affect_common::{AffectError, AffectResult};
use serde::{Deserialize, Serialize};

use crate::detection::FaceDetection;

/// Detector output captured for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Zero-based presentation index.
    pub frame: u64,

    /// Faces the detector returned. Empty means no face was found.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faces: Vec<FaceDetection>,

    /// Set when the detector failed on this frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FrameRecord {
    pub fn faces(frame: u64, faces: Vec<FaceDetection>) -> Self {
        Self {
            frame,
            faces,
            error: None,
        }
    }

    pub fn failed(frame: u64, error: impl Into<String>) -> Self {
        Self {
            frame,
            faces: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Parse a snapshot file (JSON array of detections).
pub fn parse_snapshot(json: &str) -> AffectResult<Vec<FaceDetection>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse frame records from JSONL content (one JSON object per line).
///
/// Errors carry the 1-based line number of the offending record.
pub fn parse_frame_records(jsonl: &str) -> AffectResult<Vec<FrameRecord>> {
    jsonl
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            serde_json::from_str(line).map_err(|e| AffectError::parse(line_no, e.to_string()))
        })
        .collect()
}

/// Serialize frame records to JSONL format.
pub fn serialize_frame_records(records: &[FrameRecord]) -> AffectResult<String> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}
