//! Dashboard metric contracts for the mood, sleep and medication summary
//! cards. The backend is inconsistent about the user-id key casing
//! (`userId` on mood, `userID` elsewhere); the renames pin the wire truth.

use serde::{Deserialize, Serialize};

use crate::analytics::Percent;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagData {
    pub tag_name: String,
    pub count: u32,
    pub percentage: Percent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodMetrics {
    pub user_id: String,
    pub granularity: String,
    pub start_date: String,
    pub end_date: String,
    pub moving_avg: f64,
    pub avg_rating: f64,
    pub trend: String,
    pub std_deviation: f64,
    pub stability: String,
    pub top_tag_overall: TagData,
    pub top_tag_positive_days: TagData,
    pub top_tag_negative_days: TagData,
    pub top_tag_neutral_days: TagData,
    pub top_tag_clinical_days: TagData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepMetrics {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub granularity: String,
    pub start_date: String,
    pub end_date: String,
    pub avg_sleep_hours: f64,
    pub moving_avg: f64,
    pub sleep_trend: String,
    pub std_deviation: f64,
    pub stability: String,
    pub best_sleep_day: String,
    pub worst_sleep_day: String,
    pub top_sleep_quality_tag: TagData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationStat {
    pub medication_id: i64,
    pub name: String,
    pub total_doses: u32,
    pub days_active: u32,
    pub avg_doses_per_day: f64,
    pub avg_taken_at_time: String,
    pub timing_std_dev_minutes: f64,
    pub timing_description: String,
    pub earliest_time: String,
    pub latest_time: String,
    pub longest_streak: u32,
    pub current_streak: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationMetrics {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub granularity: String,
    pub start_date: String,
    pub end_date: String,
    /// Already 0–100 on the wire.
    pub adherence_rate: f64,
    pub medication_stats: Vec<MedicationStat>,
}
