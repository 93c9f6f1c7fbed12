//! Session aggregation: dominant-emotion counts across a video.
//!
//! # Session indicators
//!
//! Counts are turned into the share of subject frames each label dominated,
//! and the snapshot rules are applied to those shares. A session therefore
//! reads as confused when fear or sad dominated more than 30% of the frames
//! with a candidate, and its stress level is the share of frames dominated
//! by angry, fear, or sad.

use std::collections::BTreeMap;

use affect_model::{Emotion, EmotionScores, FrameResult, IndicatorReport};

use crate::indicators::AffectIndicators;

/// Accumulates per-frame results for one session.
///
/// Owned by a single aggregation loop. [`finalize`](Self::finalize) borrows,
/// so a session interrupted part way can still be reported.
#[derive(Debug, Clone, Default)]
pub struct SessionAggregator {
    counts: BTreeMap<Emotion, u64>,
    frames_observed: u64,
    frames_with_subject: u64,
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame. Frames without a subject only bump
    /// `frames_observed`.
    pub fn observe(&mut self, result: &FrameResult) {
        self.frames_observed += 1;
        if let Some(dist) = result.distribution() {
            *self.counts.entry(dist.dominant()).or_insert(0) += 1;
            self.frames_with_subject += 1;
        }
    }

    /// Frames in which `emotion` was dominant.
    pub fn count(&self, emotion: Emotion) -> u64 {
        self.counts.get(&emotion).copied().unwrap_or(0)
    }

    /// Every frame passed to `observe`, with or without a subject.
    pub fn frames_observed(&self) -> u64 {
        self.frames_observed
    }

    pub fn frames_with_subject(&self) -> u64 {
        self.frames_with_subject
    }

    pub fn candidate_present(&self) -> bool {
        self.frames_with_subject > 0
    }

    /// Label dominant in the most frames. Ties go to vocabulary order.
    pub fn dominant_overall(&self) -> Option<Emotion> {
        let mut best: Option<(Emotion, u64)> = None;
        for (emotion, count) in &self.counts {
            match best {
                Some((_, best_count)) if *count <= best_count => {}
                _ => best = Some((*emotion, *count)),
            }
        }
        best.map(|(emotion, _)| emotion)
    }

    /// Share of subject frames dominated by `emotion`, in `[0, 1]`.
    pub fn share(&self, emotion: Emotion) -> f64 {
        if self.frames_with_subject == 0 {
            return 0.0;
        }
        self.count(emotion) as f64 / self.frames_with_subject as f64
    }

    /// Build the session report from everything observed so far.
    pub fn finalize(&self) -> IndicatorReport {
        let emotion_scores = EmotionScores::Frequencies(self.counts.clone());

        if !self.candidate_present() {
            return IndicatorReport {
                emotion_scores,
                ..IndicatorReport::absent()
            };
        }

        let indicators = AffectIndicators::from_scores(|e| self.share(e));
        IndicatorReport {
            candidate_present: true,
            emotion_scores,
            stress_level: indicators.stress_level,
            is_confused: indicators.is_confused,
            is_confident: indicators.is_confident,
            focus_score: indicators.focus_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affect_model::EmotionDistribution;

    fn subject(pairs: &[(Emotion, f64)]) -> FrameResult {
        FrameResult::Subject(EmotionDistribution::from_pairs(pairs.iter().copied()).unwrap())
    }

    #[test]
    fn counts_dominant_labels() {
        let mut agg = SessionAggregator::new();
        for _ in 0..3 {
            agg.observe(&subject(&[(Emotion::Happy, 0.9)]));
        }
        agg.observe(&subject(&[(Emotion::Sad, 0.9)]));

        let report = agg.finalize();
        assert!(report.candidate_present);
        assert_eq!(
            report.emotion_scores,
            EmotionScores::Frequencies(BTreeMap::from([(Emotion::Happy, 3), (Emotion::Sad, 1)]))
        );
        assert_eq!(agg.count(Emotion::Fear), 0);
        assert_eq!(agg.dominant_overall(), Some(Emotion::Happy));
    }

    #[test]
    fn no_subject_frames_are_not_counted() {
        let mut agg = SessionAggregator::new();
        agg.observe(&FrameResult::NoSubject);
        agg.observe(&subject(&[(Emotion::Neutral, 0.8)]));
        agg.observe(&FrameResult::NoSubject);

        assert_eq!(agg.frames_observed(), 3);
        assert_eq!(agg.frames_with_subject(), 1);
        assert_eq!(agg.count(Emotion::Neutral), 1);
        assert!(agg.finalize().candidate_present);
    }

    #[test]
    fn session_without_subject_is_absent() {
        let mut agg = SessionAggregator::new();
        for _ in 0..5 {
            agg.observe(&FrameResult::NoSubject);
        }

        let report = agg.finalize();
        assert!(!report.candidate_present);
        assert!(report.emotion_scores.is_empty());
        assert_eq!(report.stress_level, 0.0);
        assert_eq!(report.focus_score, 0.0);
        assert!(matches!(report.emotion_scores, EmotionScores::Frequencies(_)));
    }

    #[test]
    fn empty_distribution_counts_as_first_label() {
        let mut agg = SessionAggregator::new();
        agg.observe(&FrameResult::Subject(EmotionDistribution::new()));
        assert_eq!(agg.count(Emotion::Angry), 1);
    }

    #[test]
    fn session_indicators_use_frame_shares() {
        let mut agg = SessionAggregator::new();
        for _ in 0..3 {
            agg.observe(&subject(&[(Emotion::Happy, 0.9)]));
        }
        agg.observe(&subject(&[(Emotion::Sad, 0.9)]));

        let report = agg.finalize();
        assert_eq!(report.stress_level, 0.25);
        assert!(!report.is_confused);
        assert!(report.is_confident);
        assert_eq!(report.focus_score, 1.0);
    }

    #[test]
    fn fearful_session_is_confused_and_stressed() {
        let mut agg = SessionAggregator::new();
        agg.observe(&subject(&[(Emotion::Fear, 0.7), (Emotion::Neutral, 0.2)]));
        agg.observe(&subject(&[(Emotion::Fear, 0.6)]));
        agg.observe(&subject(&[(Emotion::Neutral, 0.6)]));

        let report = agg.finalize();
        assert_eq!(report.stress_level, 0.67);
        assert!(report.is_confused);
        assert!(!report.is_confident);
    }

    #[test]
    fn finalize_can_be_called_mid_session() {
        let mut agg = SessionAggregator::new();
        agg.observe(&subject(&[(Emotion::Angry, 0.9)]));
        let partial = agg.finalize();
        agg.observe(&subject(&[(Emotion::Happy, 0.9)]));
        let full = agg.finalize();

        assert_eq!(partial.emotion_scores.get(Emotion::Happy), 0.0);
        assert_eq!(full.emotion_scores.get(Emotion::Happy), 1.0);
        assert_eq!(partial.stress_level, 1.0);
        assert_eq!(full.stress_level, 0.5);
    }
}
