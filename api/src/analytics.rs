//! Analytics payload records: trend, pattern and period-comparison
//! statistics as the backend computes them. All numbers arrive ready-made;
//! the client only derives prose and chart geometry from them.
//!
//! Units
//! -----
//! The backend mixes two percentage representations and the distinction is
//! load-bearing: pattern frequencies are already 0–100 ([`Percent`]) while
//! comparison frequencies and deltas are signed fractions of 1
//! ([`Fraction`]). They are deliberately separate types with one explicit
//! bridge; unifying them would hide a 100× unit bug.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::moods::Mood;

/// A value already expressed on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

/// A signed share of 1 (so 0.08 means eight percentage points).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fraction(pub f64);

impl Fraction {
    /// Percent points at tenth-of-a-point precision: `round(v × 1000) / 10`.
    /// This exact rounding is what delta sentences render, so it lives on the
    /// type rather than in each call site.
    pub fn as_percent_points(self) -> f64 {
        (self.0 * 1000.0).round() / 10.0
    }
}

/// One week of the trend window. `mood_counts` is sparse; an absent mood
/// means zero tags that week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPoint {
    /// Calendar date of the week start, `YYYY-MM-DD`.
    pub week_start: String,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub mood_counts: BTreeMap<Mood, u32>,
}

/// Weekly trend statistics over a reporting period. Weeks are not guaranteed
/// to arrive sorted; consumers must order them by `week_start` before
/// deriving anything directional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendStats {
    pub period_start: String,
    pub period_end: String,
    /// Qualitative direction ("improving", "declining", "stable", ...)
    /// computed upstream and consumed verbatim.
    #[serde(default)]
    pub overall_trend_label: Option<String>,
    #[serde(default)]
    pub weeks: Vec<WeekPoint>,
}

/// Pattern-detection statistics for a single period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternStats {
    #[serde(default)]
    pub entry_count: u32,
    #[serde(default)]
    pub average_intensity: Option<f64>,
    /// Share of entries per mood, already 0–100.
    #[serde(default)]
    pub mood_frequencies: BTreeMap<Mood, Percent>,
    #[serde(default)]
    pub mood_stability_label: Option<String>,
    #[serde(default)]
    pub dominant_moods: Vec<Mood>,
    #[serde(default)]
    pub best_day_of_week: Option<String>,
    #[serde(default)]
    pub worst_day_of_week: Option<String>,
    #[serde(default)]
    pub longest_positive_streak_days: u32,
    #[serde(default)]
    pub longest_negative_streak_days: u32,
}

/// Headline numbers for one side of a period comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    #[serde(default)]
    pub entry_count: i64,
    /// Absent when the period holds no entries.
    #[serde(default)]
    pub average_intensity: Option<f64>,
    /// Share of entries per mood as a fraction of 1, NOT 0–100.
    #[serde(default)]
    pub mood_frequencies: BTreeMap<Mood, Fraction>,
}

/// Period-over-period deltas, all signed as period 2 minus period 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Differences {
    #[serde(default)]
    pub entry_count_delta: i64,
    #[serde(default)]
    pub average_intensity_delta: Option<f64>,
    #[serde(default)]
    pub mood_frequency_delta: BTreeMap<Mood, Fraction>,
    /// Pre-worded change sentences ("CONTENT increased by 8%", ...).
    #[serde(default)]
    pub mood_change_descriptions: Vec<String>,
}

/// Two periods side by side plus their deltas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    pub period1: PeriodSummary,
    pub period2: PeriodSummary,
    pub differences: Differences,
}
