//! Wire contracts shared between the Moodpulse client crates and the
//! statistics backend. Everything here is a plain serde record: the backend
//! computes, the client renders.

pub mod analytics;
pub mod metrics;
pub mod moods;

pub use analytics::{
    ComparisonStats, Differences, Fraction, PatternStats, Percent, PeriodSummary, TrendStats,
    WeekPoint,
};
pub use metrics::{MedicationMetrics, MedicationStat, MoodMetrics, SleepMetrics, TagData};
pub use moods::{Mood, ParseMoodError};
