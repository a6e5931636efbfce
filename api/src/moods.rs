//! The closed mood vocabulary and its fixed display colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback swatch for labels the backend sends that we don't recognize.
pub const FALLBACK_COLOR: &str = "#9ca3af";

/// One of the ten fixed mood labels. Declaration order is the canonical
/// enumeration order and drives every ordered iteration and tie-break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
    Calm,
    Depressed,
    Irritated,
    Content,
    Stressed,
}

impl Mood {
    pub const ALL: [Mood; 10] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
        Mood::Excited,
        Mood::Calm,
        Mood::Depressed,
        Mood::Irritated,
        Mood::Content,
        Mood::Stressed,
    ];

    /// Wire label, also the casing used in user-facing sentences.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "HAPPY",
            Mood::Sad => "SAD",
            Mood::Angry => "ANGRY",
            Mood::Anxious => "ANXIOUS",
            Mood::Excited => "EXCITED",
            Mood::Calm => "CALM",
            Mood::Depressed => "DEPRESSED",
            Mood::Irritated => "IRRITATED",
            Mood::Content => "CONTENT",
            Mood::Stressed => "STRESSED",
        }
    }

    /// Fixed display color. This is a static lookup, never themed at runtime.
    pub fn color(self) -> &'static str {
        match self {
            Mood::Happy => "#10B981",
            Mood::Sad => "#3B82F6",
            Mood::Angry => "#EF4444",
            Mood::Anxious => "#F59E0B",
            Mood::Excited => "#8B5CF6",
            Mood::Calm => "#06B6D4",
            Mood::Depressed => "#6366F1",
            Mood::Irritated => "#F97316",
            Mood::Content => "#84CC16",
            Mood::Stressed => "#EC4899",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized mood label: {0}")]
pub struct ParseMoodError(pub String);

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseMoodError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_serde() {
        for mood in Mood::ALL {
            let json = serde_json::to_string(&mood).unwrap();
            assert_eq!(json, format!("\"{}\"", mood.label()));
            let back: Mood = serde_json::from_str(&json).unwrap();
            assert_eq!(back, mood);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!(" Stressed ".parse::<Mood>().unwrap(), Mood::Stressed);
        assert!("JOYFUL".parse::<Mood>().is_err());
    }

    #[test]
    fn canonical_order_matches_declaration() {
        assert_eq!(Mood::ALL[0], Mood::Happy);
        assert_eq!(Mood::ALL[9], Mood::Stressed);
        assert!(Mood::Happy < Mood::Stressed);
    }
}
