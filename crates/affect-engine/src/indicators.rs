//! Indicator derivation shared by snapshot and session scoring.
//!
//! Thresholds and the stress-contributing labels are fixed so reports stay
//! comparable with those already delivered to consumers.

use affect_model::Emotion;

/// `fear` or `sad` above this marks the candidate as confused.
pub const CONFUSION_THRESHOLD: f64 = 0.3;

/// `happy` above this marks the candidate as confident.
pub const HAPPY_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// `neutral` above this marks the candidate as confident.
pub const NEUTRAL_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Attention is not estimated yet; a present candidate always scores this.
pub const PLACEHOLDER_FOCUS_SCORE: f64 = 1.0;

/// Round to 2 decimal places, halves away from zero.
///
/// `0.005` rounds to `0.01` and `0.004` to `0.0`.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Indicators derived from per-label scores in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffectIndicators {
    pub stress_level: f64,
    pub is_confused: bool,
    pub is_confident: bool,
    pub focus_score: f64,
}

impl AffectIndicators {
    /// Derive indicators from a per-label score lookup.
    ///
    /// Snapshot scoring passes probabilities; session scoring passes the
    /// share of frames each label dominated.
    pub fn from_scores(score: impl Fn(Emotion) -> f64) -> Self {
        let stress: f64 = Emotion::STRESS.iter().map(|e| score(*e)).sum();

        Self {
            stress_level: round_to_hundredths(stress),
            is_confused: score(Emotion::Fear) > CONFUSION_THRESHOLD
                || score(Emotion::Sad) > CONFUSION_THRESHOLD,
            is_confident: score(Emotion::Happy) > HAPPY_CONFIDENCE_THRESHOLD
                || score(Emotion::Neutral) > NEUTRAL_CONFIDENCE_THRESHOLD,
            focus_score: PLACEHOLDER_FOCUS_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_boundary() {
        assert_eq!(round_to_hundredths(0.005), 0.01);
        assert_eq!(round_to_hundredths(0.004), 0.0);
        assert_eq!(round_to_hundredths(0.1 + 0.35 + 0.1), 0.55);
        assert_eq!(round_to_hundredths(1.234), 1.23);
    }

    #[test]
    fn thresholds_are_strict() {
        let at_threshold = AffectIndicators::from_scores(|e| match e {
            Emotion::Fear => 0.3,
            Emotion::Happy => 0.5,
            Emotion::Neutral => 0.6,
            _ => 0.0,
        });
        assert!(!at_threshold.is_confused);
        assert!(!at_threshold.is_confident);

        let above = AffectIndicators::from_scores(|e| match e {
            Emotion::Sad => 0.31,
            Emotion::Neutral => 0.61,
            _ => 0.0,
        });
        assert!(above.is_confused);
        assert!(above.is_confident);
    }

    #[test]
    fn only_stress_labels_count_towards_stress() {
        let indicators = AffectIndicators::from_scores(|e| match e {
            Emotion::Disgust | Emotion::Surprise | Emotion::Happy => 0.9,
            Emotion::Angry => 0.2,
            _ => 0.0,
        });
        assert_eq!(indicators.stress_level, 0.2);
        assert_eq!(indicators.focus_score, PLACEHOLDER_FOCUS_SCORE);
    }
}
