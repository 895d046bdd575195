use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::round::Title;

/// Stable opaque identifier handed out by the auth provider. Not a UUID:
/// identity backends use their own formats, so this stays a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Running win/loss tally for one user. Created lazily as zeroes on first
/// access and advanced by exactly one increment per completed round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserAggregate {
    pub wins: u32,
    pub losses: u32,
}

impl UserAggregate {
    /// Returns the tally advanced by one completed round.
    pub fn record(&self, correct: bool) -> Self {
        Self {
            wins: self.wins + u32::from(correct),
            losses: self.losses + u32::from(!correct),
        }
    }
}

/// Append-only log entry for one finished round. Written once, never
/// updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeRecord {
    pub user_id: UserId,
    pub title: String,
    pub correct: bool,
    pub timestamp: DateTime<Utc>,
}

impl OutcomeRecord {
    pub fn new(user_id: UserId, title: &Title, correct: bool) -> Self {
        Self {
            user_id,
            title: title.as_str().to_owned(),
            correct,
            timestamp: Utc::now(),
        }
    }

    /// Storage key, `{user_id}_{iso timestamp}`. Two submissions for the
    /// same user in the same millisecond collide; the store keeps the last
    /// write for that key.
    pub fn key(&self) -> String {
        format!("{}_{}", self.user_id, self.timestamp.to_rfc3339())
    }
}
