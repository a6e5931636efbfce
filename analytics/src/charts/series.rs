//! Series preparation for the analytics charts: weekly rating lines,
//! per-mood frequency series, distribution bars and slices, legend
//! percentages, axis scaling, and parsed mood-change rows.

use std::collections::BTreeMap;

use api::moods::FALLBACK_COLOR;
use api::{Differences, Fraction, Mood, Percent, TrendStats, WeekPoint};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::core::format::week_label;

const INCREASE_COLOR: &str = "#059669";
const DECREASE_COLOR: &str = "#dc2626";
const NEUTRAL_COLOR: &str = "#6b7280";

/// Rating charts always span the full 0–10 scale.
pub const RATING_AXIS_MAX: f64 = 10.0;
pub const RATING_AXIS_SECTIONS: u32 = 5;
pub const RATING_AXIS_LABELS: [&str; 6] = ["0", "2", "4", "6", "8", "10"];

/// Weeks arrive in arbitrary order; every derivation sorts them first.
/// Week starts are ISO dates, so the string order is the calendar order.
pub fn sort_weeks(weeks: &[WeekPoint]) -> Vec<WeekPoint> {
    let mut sorted = weeks.to_vec();
    sorted.sort_by(|a, b| a.week_start.cmp(&b.week_start));
    sorted
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub value: f64,
    pub label: String,
}

/// Weekly average-rating points in calendar order, rounded to two decimals.
/// Weeks without a rating are left off the line.
pub fn rating_line(stats: &TrendStats) -> Vec<LinePoint> {
    sort_weeks(&stats.weeks)
        .iter()
        .filter_map(|week| {
            week.average_rating.map(|rating| LinePoint {
                value: (rating * 100.0).round() / 100.0,
                label: week_label(&week.week_start),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSeries {
    pub mood: Mood,
    pub color: &'static str,
    pub points: Vec<LinePoint>,
}

/// One zero-filled series per mood, in the order moods first appear across
/// the sorted weeks, so stacked charts stay consistent week to week.
pub fn mood_frequency_series(stats: &TrendStats) -> Vec<MoodSeries> {
    let weeks = sort_weeks(&stats.weeks);
    mood_union(&weeks)
        .into_iter()
        .map(|mood| MoodSeries {
            mood,
            color: mood.color(),
            points: weeks
                .iter()
                .map(|week| LinePoint {
                    value: f64::from(week.mood_counts.get(&mood).copied().unwrap_or(0)),
                    label: week_label(&week.week_start),
                })
                .collect(),
        })
        .collect()
}

fn mood_union(weeks: &[WeekPoint]) -> Vec<Mood> {
    let mut seen = Vec::new();
    for week in weeks {
        for mood in week.mood_counts.keys() {
            if !seen.contains(mood) {
                seen.push(*mood);
            }
        }
    }
    seen
}

/// Total tag count per mood across all weeks. Only moods that actually
/// appear are present in the result.
pub fn mood_totals(weeks: &[WeekPoint]) -> BTreeMap<Mood, u32> {
    let mut totals: BTreeMap<Mood, u32> = BTreeMap::new();
    for week in weeks {
        for (mood, count) in &week.mood_counts {
            *totals.entry(*mood).or_insert(0) += count;
        }
    }
    totals
}

/// The mood with the largest share of the grand total, as an integer
/// percent. Ties break toward the earlier mood in the canonical order, and
/// an empty period still reports the first mood at 0%.
pub fn top_mood(totals: &BTreeMap<Mood, u32>) -> (Mood, u32) {
    let grand_total: u32 = totals.values().sum();

    let mut best = (Mood::ALL[0], 0u32);
    for mood in Mood::ALL {
        let count = totals.get(&mood).copied().unwrap_or(0);
        let percent = if grand_total > 0 {
            ((f64::from(count) / f64::from(grand_total)) * 100.0).round() as u32
        } else {
            0
        };
        if percent > best.1 {
            best = (mood, percent);
        }
    }
    best
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub mood: Mood,
    pub color: &'static str,
    /// Share of the grand total, rounded to one decimal.
    pub percent: f64,
}

/// Legend entries for the moods present across the weeks, each with its
/// share of the grand tag total.
pub fn legend_entries(stats: &TrendStats) -> Vec<LegendEntry> {
    let weeks = sort_weeks(&stats.weeks);
    let totals = mood_totals(&weeks);
    let grand_total: u32 = totals.values().sum();

    mood_union(&weeks)
        .into_iter()
        .map(|mood| {
            let count = totals.get(&mood).copied().unwrap_or(0);
            let percent = if grand_total > 0 {
                (f64::from(count) / f64::from(grand_total) * 1000.0).round() / 10.0
            } else {
                0.0
            };
            LegendEntry {
                mood,
                color: mood.color(),
                percent,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyAxis {
    pub max_value: f64,
    pub labels: Vec<String>,
}

/// Y axis for the mood-frequency chart: at least five sections, stretched to
/// the largest weekly count.
pub fn frequency_axis(weeks: &[WeekPoint]) -> FrequencyAxis {
    let max_count = weeks
        .iter()
        .flat_map(|week| week.mood_counts.values())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let top = max_count.max(5);
    FrequencyAxis {
        max_value: f64::from(top),
        labels: (0..=top).map(|tick| tick.to_string()).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDatum {
    pub value: f64,
    pub label: &'static str,
    pub color: &'static str,
}

/// Distribution bars from frequencies already on the 0–100 scale
/// (pattern statistics).
pub fn distribution_bars(frequencies: &BTreeMap<Mood, Percent>) -> Vec<BarDatum> {
    frequencies
        .iter()
        .map(|(mood, share)| BarDatum {
            value: share.0,
            label: mood.label(),
            color: mood.color(),
        })
        .collect()
}

/// Distribution bars from fractional frequencies (period summaries). The
/// ×100 here is the unit conversion, not a formatting step: these inputs
/// are fractions of 1.
pub fn distribution_bars_fraction(frequencies: &BTreeMap<Mood, Fraction>) -> Vec<BarDatum> {
    frequencies
        .iter()
        .map(|(mood, share)| BarDatum {
            value: share.0 * 100.0,
            label: mood.label(),
            color: mood.color(),
        })
        .collect()
}

/// Bar chart headroom: the data maximum plus five.
pub fn bar_axis_max(bars: &[BarDatum]) -> f64 {
    bars.iter().fold(0.0_f64, |acc, bar| acc.max(bar.value)) + 5.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeDirection {
    Increased,
    Decreased,
    Same,
}

impl ChangeDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            ChangeDirection::Increased => "▲",
            ChangeDirection::Decreased => "▼",
            ChangeDirection::Same => "–",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ChangeDirection::Increased => INCREASE_COLOR,
            ChangeDirection::Decreased => DECREASE_COLOR,
            ChangeDirection::Same => NEUTRAL_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodChangeRow {
    pub mood: Option<Mood>,
    pub name: String,
    pub color: &'static str,
    pub direction: ChangeDirection,
    /// Absolute change in percent points, tenth-of-a-point precision.
    pub percent_points: f64,
}

impl MoodChangeRow {
    /// Signed display suffix like `+8%` / `-3.4%`; empty for unchanged rows.
    pub fn delta_label(&self) -> String {
        if self.direction == ChangeDirection::Same || self.percent_points == 0.0 {
            return String::new();
        }
        let sign = match self.direction {
            ChangeDirection::Increased => "+",
            _ => "-",
        };
        format!("{sign}{}%", self.percent_points)
    }
}

static MOOD_CHANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\w+)\s+(increased|decreased|stayed the same)(?:\s+by\s+([0-9]+)%)*$")
        .expect("mood change pattern is valid")
});

/// Parse the backend's pre-worded change sentences ("CONTENT increased by
/// 8%", "IRRITATED stayed the same") into display rows. When a sentence
/// omits its percentage, the value is recovered from the differences map.
pub fn mood_change_rows(differences: &Differences) -> Vec<MoodChangeRow> {
    differences
        .mood_change_descriptions
        .iter()
        .map(|sentence| mood_change_row(sentence, differences))
        .collect()
}

fn mood_change_row(sentence: &str, differences: &Differences) -> MoodChangeRow {
    let captures = MOOD_CHANGE_RE.captures(sentence.trim());

    let raw_name = captures
        .as_ref()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .or_else(|| sentence.split_whitespace().next())
        .unwrap_or("")
        .to_uppercase();

    let direction = captures
        .as_ref()
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_lowercase())
        .map(|word| match word.as_str() {
            "increased" => ChangeDirection::Increased,
            "decreased" => ChangeDirection::Decreased,
            _ => ChangeDirection::Same,
        })
        .unwrap_or(ChangeDirection::Same);

    let mood = raw_name.parse::<Mood>().ok();

    let percent_points = captures
        .as_ref()
        .and_then(|caps| caps.get(3))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or_else(|| {
            mood.and_then(|mood| differences.mood_frequency_delta.get(&mood))
                .map(|delta| Fraction(delta.0.abs()).as_percent_points())
                .unwrap_or(0.0)
        });

    MoodChangeRow {
        color: mood.map(Mood::color).unwrap_or(FALLBACK_COLOR),
        mood,
        name: raw_name,
        direction,
        percent_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trend_fixture() -> TrendStats {
        serde_json::from_value(json!({
            "periodStart": "2025-03-01",
            "periodEnd": "2025-03-28",
            "overallTrendLabel": "improving",
            "weeks": [
                {
                    "weekStart": "2025-03-15",
                    "averageRating": 7.25,
                    "moodCounts": { "CALM": 2, "HAPPY": 4 }
                },
                {
                    "weekStart": "2025-03-01",
                    "averageRating": 5.0,
                    "moodCounts": { "HAPPY": 2, "STRESSED": 2 }
                },
                {
                    "weekStart": "2025-03-08",
                    "moodCounts": { "HAPPY": 2 }
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn rating_line_sorts_and_skips_missing_ratings() {
        let points = rating_line(&trend_fixture());
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "3/1");
        assert_eq!(points[0].value, 5.0);
        assert_eq!(points[1].label, "3/15");
        assert_eq!(points[1].value, 7.25);
    }

    #[test]
    fn mood_series_are_zero_filled_in_first_seen_order() {
        let series = mood_frequency_series(&trend_fixture());
        let moods: Vec<Mood> = series.iter().map(|s| s.mood).collect();
        assert_eq!(moods, vec![Mood::Happy, Mood::Stressed, Mood::Calm]);

        let stressed = &series[1];
        let values: Vec<f64> = stressed.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![2.0, 0.0, 0.0]);
        assert_eq!(stressed.color, Mood::Stressed.color());
    }

    #[test]
    fn top_mood_breaks_ties_toward_canonical_order() {
        let totals = BTreeMap::from([(Mood::Content, 3), (Mood::Sad, 3), (Mood::Angry, 2)]);
        let (mood, percent) = top_mood(&totals);
        assert_eq!(mood, Mood::Sad);
        assert_eq!(percent, 38);
    }

    #[test]
    fn top_mood_of_nothing_is_first_mood_at_zero() {
        let (mood, percent) = top_mood(&BTreeMap::new());
        assert_eq!(mood, Mood::Happy);
        assert_eq!(percent, 0);
    }

    #[test]
    fn legend_percentages_sum_close_to_hundred() {
        let entries = legend_entries(&trend_fixture());
        let total: f64 = entries.iter().map(|entry| entry.percent).sum();
        assert!((total - 100.0).abs() < 0.3);

        let happy = entries.iter().find(|e| e.mood == Mood::Happy).unwrap();
        assert_eq!(happy.percent, 66.7);
    }

    #[test]
    fn frequency_axis_has_at_least_five_sections() {
        let axis = frequency_axis(&trend_fixture().weeks);
        assert_eq!(axis.max_value, 5.0);
        assert_eq!(axis.labels.len(), 6);

        let axis = frequency_axis(&[]);
        assert_eq!(axis.max_value, 5.0);
    }

    #[test]
    fn fraction_bars_convert_units_and_percent_bars_do_not() {
        let percent_bars = distribution_bars(&BTreeMap::from([(Mood::Calm, Percent(40.0))]));
        assert_eq!(percent_bars[0].value, 40.0);

        let fraction_bars =
            distribution_bars_fraction(&BTreeMap::from([(Mood::Calm, Fraction(0.4))]));
        assert_eq!(fraction_bars[0].value, 40.0);

        assert_eq!(bar_axis_max(&percent_bars), 45.0);
        assert_eq!(bar_axis_max(&[]), 5.0);
    }

    fn differences_fixture() -> Differences {
        Differences {
            entry_count_delta: 0,
            average_intensity_delta: None,
            mood_frequency_delta: BTreeMap::from([
                (Mood::Content, Fraction(0.08)),
                (Mood::Irritated, Fraction(-0.034)),
            ]),
            mood_change_descriptions: vec![
                "CONTENT increased by 8%".into(),
                "IRRITATED decreased".into(),
                "SERENE stayed the same".into(),
            ],
        }
    }

    #[test]
    fn change_rows_parse_direction_and_percent() {
        let rows = mood_change_rows(&differences_fixture());
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].mood, Some(Mood::Content));
        assert_eq!(rows[0].direction, ChangeDirection::Increased);
        assert_eq!(rows[0].percent_points, 8.0);
        assert_eq!(rows[0].delta_label(), "+8%");
        assert_eq!(rows[0].direction.arrow(), "▲");
    }

    #[test]
    fn change_rows_recover_percent_from_the_delta_map() {
        let rows = mood_change_rows(&differences_fixture());
        assert_eq!(rows[1].direction, ChangeDirection::Decreased);
        assert_eq!(rows[1].percent_points, 3.4);
        assert_eq!(rows[1].delta_label(), "-3.4%");
    }

    #[test]
    fn unknown_moods_fall_back_to_gray() {
        let rows = mood_change_rows(&differences_fixture());
        assert_eq!(rows[2].mood, None);
        assert_eq!(rows[2].name, "SERENE");
        assert_eq!(rows[2].color, FALLBACK_COLOR);
        assert_eq!(rows[2].direction, ChangeDirection::Same);
        assert_eq!(rows[2].delta_label(), "");
    }
}
