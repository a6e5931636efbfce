//! Label/value preparation for the dashboard metric cards (mood, sleep,
//! medication). The rendering layer prints these rows verbatim.

use api::{MedicationMetrics, MedicationStat, MoodMetrics, SleepMetrics, TagData};
use serde::Serialize;

const GOOD_COLOR: &str = "#4CAF50";
const WARN_COLOR: &str = "#FF9800";
const BAD_COLOR: &str = "#f44336";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
}

impl MetricRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// How a top tag reads on a card: `NAME (12.3%)`.
pub fn tag_summary(tag: &TagData) -> String {
    format!("{} ({:.1}%)", tag.tag_name, tag.percentage.0)
}

pub fn mood_metric_rows(metrics: &MoodMetrics) -> Vec<MetricRow> {
    vec![
        MetricRow::new("Average Rating", format!("{:.2}", metrics.avg_rating)),
        MetricRow::new("Moving Average", format!("{:.2}", metrics.moving_avg)),
        MetricRow::new("Trend", metrics.trend.clone()),
        MetricRow::new("Stability", metrics.stability.to_uppercase()),
        MetricRow::new("Std Deviation", format!("{:.2}", metrics.std_deviation)),
        MetricRow::new("Overall", tag_summary(&metrics.top_tag_overall)),
        MetricRow::new("Positive Days", tag_summary(&metrics.top_tag_positive_days)),
        MetricRow::new("Negative Days", tag_summary(&metrics.top_tag_negative_days)),
    ]
}

pub fn sleep_metric_rows(metrics: &SleepMetrics) -> Vec<MetricRow> {
    vec![
        MetricRow::new("Avg Sleep Hours", format!("{:.1}h", metrics.avg_sleep_hours)),
        MetricRow::new("Moving Average", format!("{:.1}h", metrics.moving_avg)),
        MetricRow::new("Trend", metrics.sleep_trend.clone()),
        MetricRow::new("Stability", metrics.stability.to_uppercase()),
        MetricRow::new("Std Deviation", format!("{:.2}", metrics.std_deviation)),
        MetricRow::new("Best Day", metrics.best_sleep_day.clone()),
        MetricRow::new("Worst Day", metrics.worst_sleep_day.clone()),
        MetricRow::new("Top Quality Tag", tag_summary(&metrics.top_sleep_quality_tag)),
    ]
}

pub fn medication_stat_rows(stat: &MedicationStat) -> Vec<MetricRow> {
    vec![
        MetricRow::new("Total Doses", stat.total_doses.to_string()),
        MetricRow::new("Days Active", stat.days_active.to_string()),
        MetricRow::new("Avg Doses/Day", format!("{:.1}", stat.avg_doses_per_day)),
        MetricRow::new("Usual Time", stat.avg_taken_at_time.clone()),
        MetricRow::new("Timing", stat.timing_description.clone()),
        MetricRow::new("Longest Streak", format!("{} days", stat.longest_streak)),
        MetricRow::new("Current Streak", format!("{} days", stat.current_streak)),
    ]
}

/// Adherence badge text; the rate is already 0–100 on the wire.
pub fn adherence_label(metrics: &MedicationMetrics) -> String {
    format!("{}%", metrics.adherence_rate)
}

pub fn trend_color(trend: &str) -> &'static str {
    match trend {
        "increasing" => GOOD_COLOR,
        "decreasing" => BAD_COLOR,
        _ => WARN_COLOR,
    }
}

pub fn mood_stability_color(stability: &str) -> &'static str {
    if stability == "stable" {
        GOOD_COLOR
    } else {
        WARN_COLOR
    }
}

pub fn sleep_stability_color(stability: &str) -> &'static str {
    match stability {
        "moderate" => WARN_COLOR,
        "unstable" => BAD_COLOR,
        _ => GOOD_COLOR,
    }
}

pub fn adherence_color(rate: f64) -> &'static str {
    if rate < 80.0 {
        BAD_COLOR
    } else if rate < 95.0 {
        WARN_COLOR
    } else {
        GOOD_COLOR
    }
}
