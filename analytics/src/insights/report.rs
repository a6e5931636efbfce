//! Consolidated report insights: one ranked list merged from all three
//! statistics payloads, with a free-text excerpt as the last resort, plus
//! the line classifier for rendering the plain-text report.

use api::{ComparisonStats, Fraction, Mood, PatternStats, TrendStats};
use serde::Serialize;

use super::MAX_INSIGHTS;
use crate::charts::series::{mood_totals, sort_weeks};
use crate::core::format::{pct_points, signed_trimmed};

/// Longest free-text excerpt used when no source yields an insight.
pub const MAX_FALLBACK_LINES: usize = 5;

/// Merge the per-source heuristics into one capped list. Sources are ranked
/// in fetch order (trend, then pattern, then comparison) and any source may
/// be absent. When nothing can be derived, the first non-blank lines of the
/// accompanying free-text report stand in.
pub fn heuristic_insights(
    report_text: &str,
    trend: Option<&TrendStats>,
    pattern: Option<&PatternStats>,
    comparison: Option<&ComparisonStats>,
) -> Vec<String> {
    let mut sentences = Vec::new();

    if let Some(trend) = trend {
        trend_block(trend, &mut sentences);
    }
    if let Some(pattern) = pattern {
        pattern_block(pattern, &mut sentences);
    }
    if let Some(comparison) = comparison {
        comparison_block(comparison, &mut sentences);
    }

    sentences.truncate(MAX_INSIGHTS);

    if sentences.is_empty() {
        return report_excerpt(report_text);
    }
    sentences
}

fn trend_block(stats: &TrendStats, sentences: &mut Vec<String>) {
    let weeks = sort_weeks(&stats.weeks);

    if let (Some(first), Some(last)) = (weeks.first(), weeks.last()) {
        if let (Some(start), Some(end)) = (first.average_rating, last.average_rating) {
            let direction = stats.overall_trend_label.as_deref().unwrap_or("stable");
            sentences.push(format!(
                "Average rating moved from {start} to {end}; overall trend is {direction}."
            ));
        }
    }

    let totals = mood_totals(&weeks);
    if let Some((mood, count)) = totals
        .iter()
        .fold(None::<(Mood, u32)>, |best, (mood, count)| match best {
            Some((_, top)) if *count <= top => best,
            _ => Some((*mood, *count)),
        })
    {
        sentences.push(format!(
            "Most frequent mood across weeks: {mood} ({count} tags)."
        ));
    }
}

fn pattern_block(stats: &PatternStats, sentences: &mut Vec<String>) {
    if let Some(stability) = stats.mood_stability_label.as_deref() {
        if !stability.is_empty() {
            sentences.push(format!("Mood stability is {stability}."));
        }
    }

    if let (Some(best), Some(worst)) = (
        stats.best_day_of_week.as_deref(),
        stats.worst_day_of_week.as_deref(),
    ) {
        if !best.is_empty() && !worst.is_empty() {
            sentences.push(format!("Best day: {best}, Worst day: {worst}."));
        }
    }

    if stats.longest_positive_streak_days > 0 {
        sentences.push(format!(
            "Longest positive streak: {} day(s).",
            stats.longest_positive_streak_days
        ));
    }
}

fn comparison_block(stats: &ComparisonStats, sentences: &mut Vec<String>) {
    let differences = &stats.differences;

    if let Some(delta) = differences.average_intensity_delta {
        sentences.push(format!(
            "Average intensity changed by {}.",
            signed_trimmed(delta)
        ));
    }

    let mut top_up: Option<(Mood, Fraction)> = None;
    let mut top_down: Option<(Mood, Fraction)> = None;
    for (mood, delta) in &differences.mood_frequency_delta {
        if delta.0 > 0.0 && top_up.map_or(true, |(_, best)| delta.0 > best.0) {
            top_up = Some((*mood, *delta));
        }
        if delta.0 < 0.0 && top_down.map_or(true, |(_, best)| delta.0 < best.0) {
            top_down = Some((*mood, *delta));
        }
    }

    if let Some((mood, delta)) = top_up {
        sentences.push(format!("{mood} increased by {}.", pct_points(delta)));
    }
    if let Some((mood, delta)) = top_down {
        sentences.push(format!(
            "{mood} decreased by {}.",
            pct_points(Fraction(delta.0.abs()))
        ));
    }
}

fn report_excerpt(report_text: &str) -> Vec<String> {
    report_text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .take(MAX_FALLBACK_LINES)
        .map(str::to_string)
        .collect()
}

/// One classified line of the plain-text report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ReportLine {
    Title(String),
    Heading(String),
    Bullet(String),
    Normal(String),
}

/// Classify report lines for rendering: `==` fences become headings, the
/// title line is promoted, bullets keep their markers.
pub fn report_lines(report_text: &str) -> Vec<ReportLine> {
    report_text
        .lines()
        .map(|line| {
            if line.starts_with("==") {
                ReportLine::Heading(line.replace("==", "").trim().to_string())
            } else if line.starts_with("Mood Analytics Report") {
                ReportLine::Title(line.to_string())
            } else if line.starts_with('•') || line.starts_with('-') {
                ReportLine::Bullet(line.to_string())
            } else {
                ReportLine::Normal(line.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trend(value: serde_json::Value) -> TrendStats {
        serde_json::from_value(value).unwrap()
    }

    fn comparison(value: serde_json::Value) -> ComparisonStats {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn merges_sources_in_fetch_order_and_caps_at_four() {
        let trend = trend(json!({
            "periodStart": "2025-03-01",
            "periodEnd": "2025-03-28",
            "overallTrendLabel": "improving",
            "weeks": [
                { "weekStart": "2025-03-01", "averageRating": 4.0,
                  "moodCounts": { "HAPPY": 6 } },
                { "weekStart": "2025-03-08", "averageRating": 6.5 }
            ]
        }));
        let pattern: PatternStats = serde_json::from_value(json!({
            "entryCount": 12,
            "moodStabilityLabel": "stable",
            "bestDayOfWeek": "Saturday",
            "worstDayOfWeek": "Monday",
            "longestPositiveStreakDays": 4
        }))
        .unwrap();
        let comparison = comparison(json!({
            "period1": { "entryCount": 10 },
            "period2": { "entryCount": 12 },
            "differences": { "averageIntensityDelta": 0.5 }
        }));

        let sentences =
            heuristic_insights("", Some(&trend), Some(&pattern), Some(&comparison));
        assert_eq!(
            sentences,
            vec![
                "Average rating moved from 4 to 6.5; overall trend is improving.".to_string(),
                "Most frequent mood across weeks: HAPPY (6 tags).".to_string(),
                "Mood stability is stable.".to_string(),
                "Best day: Saturday, Worst day: Monday.".to_string(),
            ]
        );
    }

    #[test]
    fn comparison_deltas_render_as_percent_points() {
        let comparison = comparison(json!({
            "period1": { "entryCount": 10 },
            "period2": { "entryCount": 10 },
            "differences": {
                "averageIntensityDelta": 0.5,
                "moodFrequencyDelta": {
                    "HAPPY": 0.08,
                    "EXCITED": 0.02,
                    "SAD": -0.03
                }
            }
        }));

        let sentences = heuristic_insights("", None, None, Some(&comparison));
        assert_eq!(
            sentences,
            vec![
                "Average intensity changed by +0.5.".to_string(),
                "HAPPY increased by 8.0%.".to_string(),
                "SAD decreased by 3.0%.".to_string(),
            ]
        );
    }

    #[test]
    fn falls_back_to_the_first_report_lines() {
        let text = "Mood Analytics Report\n\n== Summary ==\n• Entry count rose\n• Stability held\nDetails follow\nMore details";
        let sentences = heuristic_insights(text, None, None, None);
        assert_eq!(sentences.len(), MAX_FALLBACK_LINES);
        assert_eq!(sentences[0], "Mood Analytics Report");
        assert_eq!(sentences[1], "== Summary ==");
    }

    #[test]
    fn empty_bundle_and_empty_text_yield_nothing() {
        assert!(heuristic_insights("", None, None, None).is_empty());
        assert!(heuristic_insights("\n  \n", None, None, None).is_empty());
    }

    #[test]
    fn missing_trend_label_defaults_to_stable() {
        let trend = trend(json!({
            "periodStart": "2025-03-01",
            "periodEnd": "2025-03-14",
            "weeks": [
                { "weekStart": "2025-03-01", "averageRating": 5.0 },
                { "weekStart": "2025-03-08", "averageRating": 5.5 }
            ]
        }));

        let sentences = heuristic_insights("", Some(&trend), None, None);
        assert_eq!(
            sentences[0],
            "Average rating moved from 5 to 5.5; overall trend is stable."
        );
    }

    #[test]
    fn classifies_report_lines() {
        let lines = report_lines(
            "Mood Analytics Report\n== Trends ==\n• Better weekends\n- Fewer entries\nPlain text",
        );
        assert_eq!(
            lines,
            vec![
                ReportLine::Title("Mood Analytics Report".to_string()),
                ReportLine::Heading("Trends".to_string()),
                ReportLine::Bullet("• Better weekends".to_string()),
                ReportLine::Bullet("- Fewer entries".to_string()),
                ReportLine::Normal("Plain text".to_string()),
            ]
        );
    }
}
