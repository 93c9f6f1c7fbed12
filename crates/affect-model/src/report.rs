//! Indicator report delivered to report consumers.
//!
//! Field names are a wire contract with existing consumers and must not be
//! renamed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::emotion::{Emotion, EmotionDistribution};

/// Per-label scores carried by a report.
///
/// Snapshot reports carry the primary subject's probabilities. Session
/// reports carry how many frames each label dominated; labels that never
/// dominated are omitted and read as 0.
///
/// Both kinds serialize as a plain JSON object, so an empty map cannot carry
/// its kind across the wire: `{}` decodes as empty frequencies. Equality
/// therefore treats any two empty score maps as equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmotionScores {
    /// Frame counts per dominant label (session mode).
    Frequencies(BTreeMap<Emotion, u64>),
    /// Probabilities of the primary subject (snapshot mode).
    Probabilities(EmotionDistribution),
}

impl EmotionScores {
    /// Score for `emotion` as a float, 0 when absent.
    pub fn get(&self, emotion: Emotion) -> f64 {
        match self {
            EmotionScores::Frequencies(counts) => {
                counts.get(&emotion).copied().unwrap_or(0) as f64
            }
            EmotionScores::Probabilities(dist) => dist.get(emotion),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            EmotionScores::Frequencies(counts) => counts.is_empty(),
            EmotionScores::Probabilities(dist) => dist.is_empty(),
        }
    }
}

impl PartialEq for EmotionScores {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EmotionScores::Frequencies(a), EmotionScores::Frequencies(b)) => a == b,
            (EmotionScores::Probabilities(a), EmotionScores::Probabilities(b)) => a == b,
            _ => self.is_empty() && other.is_empty(),
        }
    }
}

impl Default for EmotionScores {
    fn default() -> Self {
        EmotionScores::Probabilities(EmotionDistribution::new())
    }
}

/// Session- or snapshot-level affect indicators.
///
/// Computed once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    pub candidate_present: bool,
    pub emotion_scores: EmotionScores,
    pub stress_level: f64,
    pub is_confused: bool,
    pub is_confident: bool,
    pub focus_score: f64,
}

impl IndicatorReport {
    /// Report for an analysis in which no candidate was seen.
    pub fn absent() -> Self {
        Self {
            candidate_present: false,
            emotion_scores: EmotionScores::default(),
            stress_level: 0.0,
            is_confused: false,
            is_confident: false,
            focus_score: 0.0,
        }
    }
}
