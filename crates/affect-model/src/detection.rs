//! Face detections and per-frame reduction results.

use serde::{Deserialize, Serialize};

use crate::emotion::{Emotion, EmotionDistribution};

/// Axis-aligned face region in pixels.
///
/// Serialized as the detector-native `[x, y, width, height]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u32; 4]", into = "[u32; 4]")]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region area in square pixels.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl From<[u32; 4]> for BoundingBox {
    fn from([x, y, width, height]: [u32; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<BoundingBox> for [u32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x, b.y, b.width, b.height]
    }
}

/// One face found in a frame, with its emotion distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceDetection {
    #[serde(rename = "box")]
    pub region: BoundingBox,
    pub emotions: EmotionDistribution,
}

impl FaceDetection {
    pub fn new(region: BoundingBox, emotions: EmotionDistribution) -> Self {
        Self { region, emotions }
    }

    pub fn area(&self) -> u64 {
        self.region.area()
    }
}

/// Outcome of reducing every detection in one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FrameResult {
    /// No face was detected.
    #[default]
    NoSubject,
    /// Distribution of the primary subject.
    Subject(EmotionDistribution),
}

impl FrameResult {
    pub fn is_subject(&self) -> bool {
        matches!(self, FrameResult::Subject(_))
    }

    pub fn distribution(&self) -> Option<&EmotionDistribution> {
        match self {
            FrameResult::Subject(dist) => Some(dist),
            FrameResult::NoSubject => None,
        }
    }

    /// Dominant label of the primary subject, if any.
    pub fn dominant(&self) -> Option<Emotion> {
        self.distribution().map(EmotionDistribution::dominant)
    }
}
