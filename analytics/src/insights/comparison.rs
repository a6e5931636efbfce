//! Period-comparison insights: intensity and entry-count shifts, the biggest
//! mood swing, the overall assessment, and the delta majority.

use api::{ComparisonStats, Differences, Fraction, PeriodSummary};
use tracing::debug;

use super::capped;

pub const FALLBACK: &str = "Analyzing your period comparison...";

/// Assessment threshold between "noise" and a real period-level shift.
const ASSESSMENT_THRESHOLD: f64 = 0.3;

pub fn insights(stats: Option<&ComparisonStats>) -> Vec<String> {
    let Some(stats) = stats else {
        debug!(target: "moodpulse::insights", "comparison payload absent, using placeholder");
        return vec![FALLBACK.to_string()];
    };

    capped(vec![
        intensity_shift(&stats.differences),
        entry_count_shift(&stats.differences),
        top_mood_shift(&stats.differences),
        overall_assessment(&stats.period1, &stats.period2),
        delta_majority(&stats.differences),
    ])
}

fn intensity_shift(differences: &Differences) -> Option<String> {
    let delta = differences.average_intensity_delta?;
    if delta == 0.0 {
        return None;
    }
    let direction = if delta > 0.0 { "improved" } else { "declined" };
    Some(format!(
        "Your overall mood rating {direction} by {:.1} points.",
        delta.abs()
    ))
}

fn entry_count_shift(differences: &Differences) -> Option<String> {
    let delta = differences.entry_count_delta;
    if delta == 0 {
        return None;
    }
    let direction = if delta > 0 { "more" } else { "fewer" };
    Some(format!(
        "You made {} {direction} entries in the recent period.",
        delta.abs()
    ))
}

fn top_mood_shift(differences: &Differences) -> Option<String> {
    let (mood, delta) = differences
        .mood_frequency_delta
        .iter()
        .fold(None, |best: Option<(_, Fraction)>, (mood, delta)| {
            match best {
                Some((_, top)) if delta.0.abs() <= top.0.abs() => best,
                _ => Some((*mood, *delta)),
            }
        })?;

    let direction = if delta.0 > 0.0 { "increased" } else { "decreased" };
    let points = Fraction(delta.0.abs()).as_percent_points();
    Some(format!(
        "{mood} {direction} by {points:.1}% more than other moods."
    ))
}

fn overall_assessment(period1: &PeriodSummary, period2: &PeriodSummary) -> Option<String> {
    let previous = period1.average_intensity?;
    let recent = period2.average_intensity?;

    let change = recent - previous;
    if change.abs() <= ASSESSMENT_THRESHOLD {
        return None;
    }

    let assessment = if change > 0.0 {
        "better"
    } else {
        "more challenging"
    };
    Some(format!(
        "Overall, your recent period has been {assessment} compared to the previous one."
    ))
}

fn delta_majority(differences: &Differences) -> Option<String> {
    let positive = differences
        .mood_frequency_delta
        .values()
        .filter(|delta| delta.0 > 0.0)
        .count();
    let negative = differences
        .mood_frequency_delta
        .values()
        .filter(|delta| delta.0 < 0.0)
        .count();

    if positive > negative {
        Some("More moods showed positive trends than negative ones.".to_string())
    } else if negative > positive {
        Some("More moods showed negative trends than positive ones.".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build_stats(value: serde_json::Value) -> ComparisonStats {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn absent_payload_yields_the_placeholder() {
        assert_eq!(insights(None), vec![FALLBACK.to_string()]);
    }

    #[test]
    fn top_change_reports_percent_points_not_fractions() {
        let stats = build_stats(json!({
            "period1": { "entryCount": 10 },
            "period2": { "entryCount": 10 },
            "differences": {
                "entryCountDelta": 0,
                "moodFrequencyDelta": { "HAPPY": 0.08, "SAD": -0.03 }
            }
        }));

        let sentences = insights(Some(&stats));
        assert!(
            sentences.contains(&"HAPPY increased by 8.0% more than other moods.".to_string()),
            "{sentences:?}"
        );
        assert!(!sentences.iter().any(|s| s.contains("0.1%")));
        assert!(!sentences.iter().any(|s| s.contains("80")));
    }

    #[test]
    fn directions_follow_the_deltas() {
        let stats = build_stats(json!({
            "period1": { "entryCount": 20, "averageIntensity": 6.4 },
            "period2": { "entryCount": 14, "averageIntensity": 5.2 },
            "differences": {
                "entryCountDelta": -6,
                "averageIntensityDelta": -1.2,
                "moodFrequencyDelta": {
                    "STRESSED": 0.11,
                    "CALM": -0.05,
                    "CONTENT": -0.03
                }
            }
        }));

        let sentences = insights(Some(&stats));
        assert_eq!(sentences.len(), 4);
        assert_eq!(sentences[0], "Your overall mood rating declined by 1.2 points.");
        assert_eq!(sentences[1], "You made 6 fewer entries in the recent period.");
        assert_eq!(
            sentences[2],
            "STRESSED increased by 11.0% more than other moods."
        );
        assert_eq!(
            sentences[3],
            "Overall, your recent period has been more challenging compared to the previous one."
        );
    }

    #[test]
    fn zero_deltas_stay_quiet() {
        let stats = build_stats(json!({
            "period1": { "entryCount": 10, "averageIntensity": 5.0 },
            "period2": { "entryCount": 10, "averageIntensity": 5.1 },
            "differences": {
                "entryCountDelta": 0,
                "averageIntensityDelta": 0.0,
                "moodFrequencyDelta": {}
            }
        }));

        assert!(insights(Some(&stats)).is_empty());
    }

    #[test]
    fn majority_sentence_requires_a_strict_majority() {
        let stats = build_stats(json!({
            "period1": { "entryCount": 10 },
            "period2": { "entryCount": 10 },
            "differences": {
                "moodFrequencyDelta": { "HAPPY": 0.02, "SAD": -0.02 }
            }
        }));

        let sentences = insights(Some(&stats));
        assert!(!sentences.iter().any(|s| s.contains("showed")));

        let stats = build_stats(json!({
            "period1": { "entryCount": 10 },
            "period2": { "entryCount": 10 },
            "differences": {
                "moodFrequencyDelta": { "HAPPY": 0.02, "CALM": 0.01, "SAD": -0.02 }
            }
        }));

        let sentences = insights(Some(&stats));
        assert!(sentences
            .contains(&"More moods showed positive trends than negative ones.".to_string()));
    }
}
