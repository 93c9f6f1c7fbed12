//! Replay of recorded detector output.
//!
//! Lets a session be re-analyzed from a JSONL recording of what the face
//! detector returned, without decoding video or running inference.

use std::path::Path;

use affect_common::error::{AffectError, AffectResult};
use affect_model::{parse_frame_records, FaceDetection, FrameRecord};

use crate::pipeline::{EmotionDetector, FrameSource};

/// Frame source over recorded frames, yielded in frame-index order.
#[derive(Debug, Clone)]
pub struct RecordedFrames {
    name: String,
    records: std::vec::IntoIter<FrameRecord>,
}

impl RecordedFrames {
    pub fn new(name: impl Into<String>, mut records: Vec<FrameRecord>) -> Self {
        if records.windows(2).any(|w| w[0].frame > w[1].frame) {
            tracing::debug!("Recorded frames out of order, sorting by frame index");
            records.sort_by_key(|record| record.frame);
        }
        Self {
            name: name.into(),
            records: records.into_iter(),
        }
    }

    /// Load a JSONL session recording.
    pub fn load(path: &Path) -> AffectResult<Self> {
        if !path.exists() {
            return Err(AffectError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let records = parse_frame_records(&content)?;
        tracing::debug!(path = %path.display(), frames = records.len(), "Loaded session recording");
        Ok(Self::new(path.display().to_string(), records))
    }

    /// Frames not yet yielded.
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl FrameSource for RecordedFrames {
    type Frame = FrameRecord;

    fn next_frame(&mut self) -> AffectResult<Option<FrameRecord>> {
        Ok(self.records.next())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Detector that replays each record's faces or its recorded failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedDetector;

impl EmotionDetector<FrameRecord> for RecordedDetector {
    fn detect(&mut self, frame: &FrameRecord) -> AffectResult<Vec<FaceDetection>> {
        match &frame.error {
            Some(message) => Err(AffectError::detection(format!(
                "frame {}: {message}",
                frame.frame
            ))),
            None => Ok(frame.faces.clone()),
        }
    }

    fn name(&self) -> &str {
        "recorded"
    }
}

/// Snapshot detections are already the detector's output for one image.
impl EmotionDetector<Vec<FaceDetection>> for RecordedDetector {
    fn detect(&mut self, frame: &Vec<FaceDetection>) -> AffectResult<Vec<FaceDetection>> {
        Ok(frame.clone())
    }

    fn name(&self) -> &str {
        "recorded"
    }
}
