//! Date-range helpers for the analytics queries. All arithmetic runs over a
//! caller-supplied "today" so the helpers stay pure and testable.

use serde::Serialize;
use time::{Date, Duration};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

fn iso(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month() as u8, date.day())
}

/// The default trend window: the 28 days ending today.
pub fn last_four_weeks(today: Date) -> DateRange {
    DateRange {
        start: iso(today - Duration::days(28)),
        end: iso(today),
    }
}

/// Two adjacent 28-day windows for the period comparison. Period 2 is the
/// recent window; period 1 ends the day before it starts.
pub fn comparison_periods(today: Date) -> (DateRange, DateRange) {
    let period2_start = today - Duration::days(28);
    let period1_end = period2_start - Duration::days(1);
    let period1_start = period1_end - Duration::days(27);
    (
        DateRange {
            start: iso(period1_start),
            end: iso(period1_end),
        },
        DateRange {
            start: iso(period2_start),
            end: iso(today),
        },
    )
}
