//! Shared analytics crate for Moodpulse. The pure insight-derivation and
//! chart-layout logic behind every analytics view lives here; rendering,
//! navigation and data fetching are the platform shells' concern.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod insights;
