use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use libro_types::{OutcomeRecord, UserAggregate, UserId};

/// Remote document-store boundary: one aggregate document per user plus an
/// append-only collection of outcome records. Key collisions on
/// `append_record` overwrite the previous document; that is store
/// semantics, not game semantics.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_aggregate(&self, user_id: &UserId) -> Result<Option<UserAggregate>>;

    async fn set_aggregate(&self, user_id: &UserId, aggregate: UserAggregate) -> Result<()>;

    async fn append_record(&self, key: &str, record: OutcomeRecord) -> Result<()>;
}

/// Failure while talking to the document store. The round outcome is
/// already final locally when these occur; callers log and move on.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read aggregate: {0}")]
    Get(anyhow::Error),
    #[error("failed to write aggregate: {0}")]
    Set(anyhow::Error),
    #[error("failed to append outcome record: {0}")]
    Append(anyhow::Error),
}
