use std::sync::Arc;

use tracing::info;

use crate::store::{DocumentStore, PersistenceError};
use libro_types::{OutcomeRecord, Title, UserAggregate, UserId};

/// Persists round results against the document-store boundary: one
/// immutable record per finished round plus the user's running tally.
pub struct ResultStore {
    store: Arc<dyn DocumentStore>,
}

impl ResultStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Reads the persisted tally, creating `{0, 0}` on first access so
    /// later updates always have a document to replace.
    pub async fn load_aggregate(&self, user_id: &UserId) -> Result<UserAggregate, PersistenceError> {
        match self
            .store
            .get_aggregate(user_id)
            .await
            .map_err(PersistenceError::Get)?
        {
            Some(aggregate) => Ok(aggregate),
            None => {
                let fresh = UserAggregate::default();
                self.store
                    .set_aggregate(user_id, fresh)
                    .await
                    .map_err(PersistenceError::Set)?;
                info!(user = %user_id, "created aggregate document");
                Ok(fresh)
            }
        }
    }

    /// Appends the outcome record, then replaces the aggregate with
    /// `before` advanced by one round. Read-modify-write: two sessions for
    /// the same user can lose an increment, which the store accepts.
    ///
    /// The caller's round outcome is already final before this runs; a
    /// failure here is telemetry loss, not a game-state problem.
    pub async fn record_outcome(
        &self,
        user_id: &UserId,
        title: &Title,
        correct: bool,
        before: UserAggregate,
    ) -> Result<UserAggregate, PersistenceError> {
        let record = OutcomeRecord::new(user_id.clone(), title, correct);
        let key = record.key();

        self.store
            .append_record(&key, record)
            .await
            .map_err(PersistenceError::Append)?;

        let after = before.record(correct);
        self.store
            .set_aggregate(user_id, after)
            .await
            .map_err(PersistenceError::Set)?;

        info!(user = %user_id, %key, correct, "recorded round outcome");
        Ok(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn setup() -> (ResultStore, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (ResultStore::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_load_aggregate_creates_lazily() {
        let (results, store) = setup();
        let user = UserId::new("u1");

        let aggregate = results.load_aggregate(&user).await.unwrap();
        assert_eq!(aggregate, UserAggregate::default());

        // The zero document was written, not just returned.
        assert_eq!(
            store.get_aggregate(&user).await.unwrap(),
            Some(UserAggregate::default())
        );
    }

    #[tokio::test]
    async fn test_load_aggregate_returns_existing() {
        let (results, store) = setup();
        let user = UserId::new("u1");
        let existing = UserAggregate { wins: 3, losses: 2 };
        store.set_aggregate(&user, existing).await.unwrap();

        assert_eq!(results.load_aggregate(&user).await.unwrap(), existing);
    }

    #[tokio::test]
    async fn test_record_outcome_increments_relative_to_before() {
        let (results, store) = setup();
        let user = UserId::new("u1");
        let title = Title::new("EL LIBRO").unwrap();
        let before = results.load_aggregate(&user).await.unwrap();

        let after = results
            .record_outcome(&user, &title, true, before)
            .await
            .unwrap();
        assert_eq!(after, UserAggregate { wins: 1, losses: 0 });

        let after = results
            .record_outcome(&user, &title, false, after)
            .await
            .unwrap();
        assert_eq!(after, UserAggregate { wins: 1, losses: 1 });

        assert_eq!(store.record_count().await, 2);
        assert_eq!(
            store.get_aggregate(&user).await.unwrap(),
            Some(UserAggregate { wins: 1, losses: 1 })
        );
    }

    #[tokio::test]
    async fn test_record_carries_round_details() {
        let (results, store) = setup();
        let user = UserId::new("u1");
        let title = Title::new("CAT").unwrap();

        results
            .record_outcome(&user, &title, false, UserAggregate::default())
            .await
            .unwrap();

        let records = store.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, user);
        assert_eq!(records[0].title, "CAT");
        assert!(!records[0].correct);
    }
}
