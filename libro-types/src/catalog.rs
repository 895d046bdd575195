use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Shown when the catalog has no cover image for a book.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/150";

/// One entry from the book catalog. `thumbnail_url` always carries a usable
/// reference; a missing cover degrades to [`PLACEHOLDER_THUMBNAIL`] at the
/// catalog boundary instead of failing the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookCandidate {
    pub id: u64,
    pub title: String,
    pub thumbnail_url: String,
}
