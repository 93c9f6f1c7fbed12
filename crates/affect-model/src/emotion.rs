//! Emotion vocabulary and per-face probability distributions.
//!
//! The vocabulary is closed and ordered. Declaration order of [`Emotion`]
//! is the tie-break order whenever two labels carry the same probability.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use affect_common::{AffectError, AffectResult};
use serde::{Deserialize, Serialize};

/// One label of the fixed emotion vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Angry,
    Disgust,
    Fear,
    Happy,
    Sad,
    Surprise,
    Neutral,
}

impl Emotion {
    /// Every label, in vocabulary order.
    pub const ALL: [Emotion; 7] = [
        Emotion::Angry,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Surprise,
        Emotion::Neutral,
    ];

    /// Labels whose probabilities add up to the stress level.
    pub const STRESS: [Emotion; 3] = [Emotion::Angry, Emotion::Fear, Emotion::Sad];

    /// Wire label (lower case).
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Angry => "angry",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Emotion {
    type Err = AffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.label() == s)
            .ok_or_else(|| AffectError::invalid_distribution(format!("unknown emotion label '{s}'")))
    }
}

/// Probabilities over the emotion vocabulary for a single face.
///
/// Values are bounded to `[0.0, 1.0]` per label but are not required to sum
/// to 1. Labels the detector did not report read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Emotion, f64>",
    into = "BTreeMap<Emotion, f64>"
)]
pub struct EmotionDistribution {
    probs: BTreeMap<Emotion, f64>,
}

impl EmotionDistribution {
    /// An empty distribution (every label reads as 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a distribution from `(label, probability)` pairs.
    ///
    /// Rejects NaN, infinities, and values outside `[0.0, 1.0]`.
    /// A repeated label keeps the last value.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Emotion, f64)>) -> AffectResult<Self> {
        let mut probs = BTreeMap::new();
        for (emotion, p) in pairs {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(AffectError::invalid_distribution(format!(
                    "probability for '{emotion}' must be within [0, 1], got {p}"
                )));
            }
            probs.insert(emotion, p);
        }
        Ok(Self { probs })
    }

    /// Probability of `emotion`, 0 when the label is missing.
    pub fn get(&self, emotion: Emotion) -> f64 {
        self.probs.get(&emotion).copied().unwrap_or(0.0)
    }

    /// Whether the detector reported a value for `emotion`.
    pub fn contains(&self, emotion: Emotion) -> bool {
        self.probs.contains_key(&emotion)
    }

    /// Sum of the probabilities of `emotions`.
    pub fn sum_of(&self, emotions: &[Emotion]) -> f64 {
        emotions.iter().map(|e| self.get(*e)).sum()
    }

    /// The label with the highest probability.
    ///
    /// Ties go to the label that comes first in vocabulary order. Missing
    /// labels compete as 0, so an empty distribution yields [`Emotion::Angry`].
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::ALL[0];
        let mut best_p = self.get(best);
        for emotion in Emotion::ALL.into_iter().skip(1) {
            let p = self.get(emotion);
            if p > best_p {
                best = emotion;
                best_p = p;
            }
        }
        best
    }

    /// Reported labels and their probabilities, in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        self.probs.iter().map(|(e, p)| (*e, *p))
    }

    /// Number of reported labels.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }
}

impl TryFrom<BTreeMap<Emotion, f64>> for EmotionDistribution {
    type Error = AffectError;

    fn try_from(map: BTreeMap<Emotion, f64>) -> Result<Self, Self::Error> {
        Self::from_pairs(map)
    }
}

impl From<EmotionDistribution> for BTreeMap<Emotion, f64> {
    fn from(dist: EmotionDistribution) -> Self {
        dist.probs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn missing_labels_read_as_zero() {
        let dist = EmotionDistribution::from_pairs([(Emotion::Happy, 0.7)]).unwrap();
        assert_eq!(dist.get(Emotion::Happy), 0.7);
        assert_eq!(dist.get(Emotion::Sad), 0.0);
        assert!(!dist.contains(Emotion::Sad));
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        assert!(EmotionDistribution::from_pairs([(Emotion::Fear, 1.2)]).is_err());
        assert!(EmotionDistribution::from_pairs([(Emotion::Fear, -0.1)]).is_err());
        assert!(EmotionDistribution::from_pairs([(Emotion::Fear, f64::NAN)]).is_err());
    }

    #[test]
    fn dominant_picks_highest_probability() {
        let dist = EmotionDistribution::from_pairs([
            (Emotion::Happy, 0.2),
            (Emotion::Sad, 0.6),
            (Emotion::Neutral, 0.2),
        ])
        .unwrap();
        assert_eq!(dist.dominant(), Emotion::Sad);
    }

    #[test]
    fn dominant_tie_goes_to_vocabulary_order() {
        let dist =
            EmotionDistribution::from_pairs([(Emotion::Neutral, 0.4), (Emotion::Fear, 0.4)])
                .unwrap();
        assert_eq!(dist.dominant(), Emotion::Fear);

        assert_eq!(EmotionDistribution::new().dominant(), Emotion::Angry);
    }

    #[test]
    fn stress_sum_uses_fixed_labels() {
        let dist = EmotionDistribution::from_pairs([
            (Emotion::Angry, 0.1),
            (Emotion::Fear, 0.2),
            (Emotion::Happy, 0.5),
        ])
        .unwrap();
        assert!((dist.sum_of(&Emotion::STRESS) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn json_uses_lowercase_labels() {
        let dist: EmotionDistribution =
            serde_json::from_str(r#"{"happy": 0.9, "neutral": 0.05}"#).unwrap();
        assert_eq!(dist.get(Emotion::Happy), 0.9);

        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"happy":0.9,"neutral":0.05}"#);
    }

    #[test]
    fn json_rejects_unknown_label_and_bad_values() {
        assert!(serde_json::from_str::<EmotionDistribution>(r#"{"bored": 0.5}"#).is_err());
        assert!(serde_json::from_str::<EmotionDistribution>(r#"{"sad": 3.0}"#).is_err());
    }

    #[test]
    fn labels_parse_from_str() {
        assert_eq!("surprise".parse::<Emotion>().unwrap(), Emotion::Surprise);
        assert!("Surprise".parse::<Emotion>().is_err());
        for emotion in Emotion::ALL {
            assert_eq!(emotion.to_string().parse::<Emotion>().unwrap(), emotion);
        }
    }

    fn distribution_strategy() -> impl Strategy<Value = EmotionDistribution> {
        // Thousandths keep every value exactly representable in JSON text.
        let prob = (0u32..=1000).prop_map(|n| n as f64 / 1000.0);
        proptest::collection::vec(proptest::option::of(prob), 7).prop_map(|probs| {
            EmotionDistribution::from_pairs(
                Emotion::ALL
                    .into_iter()
                    .zip(probs)
                    .filter_map(|(emotion, p)| p.map(|p| (emotion, p))),
            )
            .unwrap()
        })
    }

    proptest! {
        #[test]
        fn in_range_distribution_survives_json(dist in distribution_strategy()) {
            let json = serde_json::to_string(&dist).unwrap();
            let decoded: EmotionDistribution = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(decoded, dist);
        }

        #[test]
        fn dominant_is_first_label_of_maximal_probability(dist in distribution_strategy()) {
            let max = Emotion::ALL
                .iter()
                .map(|e| dist.get(*e))
                .fold(f64::NEG_INFINITY, f64::max);
            let first_max = Emotion::ALL
                .into_iter()
                .find(|e| dist.get(*e) == max)
                .unwrap();
            prop_assert_eq!(dist.dominant(), first_max);
        }
    }
}
