//! Pattern insights: stability, day-of-week contrast, streaks, dominant
//! moods, and the intensity band.

use api::PatternStats;
use tracing::debug;

use super::capped;

pub const FALLBACK: &str = "Analyzing your mood patterns...";

const HIGH_INTENSITY: f64 = 7.0;
const LOW_INTENSITY: f64 = 4.0;

pub fn insights(stats: Option<&PatternStats>) -> Vec<String> {
    let Some(stats) = stats else {
        debug!(target: "moodpulse::insights", "pattern payload absent, using placeholder");
        return vec![FALLBACK.to_string()];
    };

    capped(vec![
        stability(stats),
        day_contrast(stats),
        positive_streak(stats),
        negative_streak(stats),
        dominant_moods(stats),
        intensity_band(stats),
    ])
}

fn stability(stats: &PatternStats) -> Option<String> {
    let label = stats.mood_stability_label.as_deref()?;
    if label.is_empty() {
        return None;
    }
    Some(format!(
        "Your mood stability is rated as {}.",
        label.to_lowercase()
    ))
}

fn day_contrast(stats: &PatternStats) -> Option<String> {
    let best = stats.best_day_of_week.as_deref()?;
    let worst = stats.worst_day_of_week.as_deref()?;
    if best.is_empty() || worst.is_empty() {
        return None;
    }
    Some(format!(
        "Your best moods occur on {}s, while {}s tend to be more challenging.",
        best.to_lowercase(),
        worst.to_lowercase()
    ))
}

fn positive_streak(stats: &PatternStats) -> Option<String> {
    if stats.longest_positive_streak_days == 0 {
        return None;
    }
    Some(format!(
        "You've maintained positive moods for up to {} consecutive days.",
        stats.longest_positive_streak_days
    ))
}

fn negative_streak(stats: &PatternStats) -> Option<String> {
    if stats.longest_negative_streak_days == 0 {
        return None;
    }
    Some(format!(
        "Your longest difficult period was {} day(s).",
        stats.longest_negative_streak_days
    ))
}

fn dominant_moods(stats: &PatternStats) -> Option<String> {
    if stats.dominant_moods.is_empty() {
        return None;
    }
    let joined = stats
        .dominant_moods
        .iter()
        .map(|mood| mood.label())
        .collect::<Vec<_>>()
        .join(" and ");
    Some(format!("{joined} are your dominant mood patterns."))
}

fn intensity_band(stats: &PatternStats) -> Option<String> {
    let intensity = stats.average_intensity?;
    let band = if intensity >= HIGH_INTENSITY {
        "high"
    } else if intensity <= LOW_INTENSITY {
        "low"
    } else {
        "moderate"
    };
    Some(format!(
        "Your average mood intensity is {band} ({intensity:.1}/10)."
    ))
}
