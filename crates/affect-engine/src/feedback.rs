//! Plain-language feedback rendered from an indicator report.

use affect_model::IndicatorReport;

/// Stress above this reads as "highly stressed".
const HIGH_STRESS: f64 = 0.5;

const EXCELLENT_FOCUS: f64 = 0.75;
const MODERATE_FOCUS: f64 = 0.5;

/// One-sentence summary of a report for the interview candidate.
pub fn summarize(report: &IndicatorReport) -> String {
    if !report.candidate_present {
        return "The candidate was not consistently visible in the camera. \
                Please ensure a stable setup next time."
            .to_string();
    }

    let confidence = if report.is_confident {
        "confident"
    } else {
        "less confident"
    };
    let stress = if report.stress_level > HIGH_STRESS {
        "highly stressed"
    } else {
        "calm"
    };
    let clarity = if report.is_confused { "confused" } else { "clear" };
    let focus = if report.focus_score > EXCELLENT_FOCUS {
        "excellent"
    } else if report.focus_score > MODERATE_FOCUS {
        "moderate"
    } else {
        "low"
    };

    format!(
        "The candidate maintained a {confidence}, {stress}, and {clarity} demeanor. \
         Focus levels were {focus}."
    )
}
