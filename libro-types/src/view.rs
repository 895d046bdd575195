use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::round::Outcome;

/// Snapshot of a session the presentation layer binds to: the masked word,
/// attempt counters, the local win/loss tally and the current book's
/// artwork. Produced fresh after every operation; holds no engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionView {
    pub rendered: String,
    pub wrong_count: u32,
    pub max_attempts: u32,
    pub outcome: Outcome,
    pub wins: u32,
    pub losses: u32,
    pub book_id: u64,
    pub thumbnail_url: String,
}
