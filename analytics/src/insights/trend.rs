//! Trend insights: overall direction, dominant mood, rating spread, and the
//! first-to-last week change.

use api::{TrendStats, WeekPoint};
use tracing::debug;

use super::capped;
use crate::charts::series::{mood_totals, sort_weeks, top_mood};

pub const FALLBACK: &str = "Analyzing your mood patterns...";

/// Change below this magnitude isn't worth a sentence.
const NOTABLE_CHANGE: f64 = 0.5;

pub fn insights(stats: Option<&TrendStats>) -> Vec<String> {
    let Some(stats) = stats else {
        debug!(target: "moodpulse::insights", "trend payload absent, using placeholder");
        return vec![FALLBACK.to_string()];
    };

    let weeks = sort_weeks(&stats.weeks);
    capped(vec![
        overall_direction(stats),
        dominant_mood(&weeks),
        rating_spread(&weeks),
        first_to_last_change(&weeks),
    ])
}

fn overall_direction(stats: &TrendStats) -> Option<String> {
    let label = stats.overall_trend_label.as_deref()?;
    if label.is_empty() {
        return None;
    }
    Some(format!(
        "Your mood trend is {} over this period.",
        label.to_lowercase()
    ))
}

fn dominant_mood(weeks: &[WeekPoint]) -> Option<String> {
    let totals = mood_totals(weeks);
    let (mood, percent) = top_mood(&totals);
    Some(format!(
        "{mood} was your most frequent mood ({percent}%)."
    ))
}

fn rating_spread(weeks: &[WeekPoint]) -> Option<String> {
    let ratings: Vec<f64> = weeks.iter().filter_map(|week| week.average_rating).collect();
    if ratings.is_empty() {
        return None;
    }

    let min = ratings.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = ratings.iter().sum::<f64>() / ratings.len() as f64;

    Some(format!(
        "Your weekly ratings ranged from {min:.1} to {max:.1} (avg: {avg:.1}/10)."
    ))
}

fn first_to_last_change(weeks: &[WeekPoint]) -> Option<String> {
    if weeks.len() < 2 {
        return None;
    }
    let first = weeks.first()?.average_rating?;
    let last = weeks.last()?.average_rating?;

    let change = last - first;
    if change.abs() <= NOTABLE_CHANGE {
        return None;
    }

    let direction = if change > 0.0 { "improved" } else { "declined" };
    Some(format!(
        "Your mood {direction} by {:.1} points from the first to last week.",
        change.abs()
    ))
}
