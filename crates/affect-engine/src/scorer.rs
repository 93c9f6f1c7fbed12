//! Single-frame scoring for snapshot analysis.

use affect_model::{EmotionScores, FaceDetection, FrameResult, IndicatorReport};

use crate::indicators::AffectIndicators;
use crate::reducer::reduce;

/// Score one frame's detections into an indicator report.
///
/// Pure: the same detections always produce the same report.
pub fn score(detections: &[FaceDetection]) -> IndicatorReport {
    match reduce(detections) {
        FrameResult::NoSubject => IndicatorReport::absent(),
        FrameResult::Subject(emotions) => {
            let indicators = AffectIndicators::from_scores(|e| emotions.get(e));
            IndicatorReport {
                candidate_present: true,
                emotion_scores: EmotionScores::Probabilities(emotions),
                stress_level: indicators.stress_level,
                is_confused: indicators.is_confused,
                is_confident: indicators.is_confident,
                focus_score: indicators.focus_score,
            }
        }
    }
}
