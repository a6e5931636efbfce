//! Heuristic insight generation. Each analytics view derives at most four
//! plain-English sentences from its statistics payload.
//!
//! Generators never fail: an absent payload degrades to a single placeholder
//! sentence, and every derivation step is independently guarded so a partial
//! payload just yields fewer sentences, never an error.

pub mod comparison;
pub mod pattern;
pub mod report;
pub mod trend;

/// Hard cap on derived sentences per view. Earlier steps win.
pub const MAX_INSIGHTS: usize = 4;

/// Collapse guarded derivation steps into the capped sentence list.
fn capped(steps: Vec<Option<String>>) -> Vec<String> {
    steps.into_iter().flatten().take(MAX_INSIGHTS).collect()
}
