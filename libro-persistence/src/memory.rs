use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::DocumentStore;
use libro_types::{OutcomeRecord, UserAggregate, UserId};

/// In-process document store for tests and guest sessions. Mirrors the
/// remote store's last-write-wins key semantics.
#[derive(Default)]
pub struct MemoryStore {
    aggregates: RwLock<HashMap<UserId, UserAggregate>>,
    records: RwLock<HashMap<String, OutcomeRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn records(&self) -> Vec<OutcomeRecord> {
        self.records.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_aggregate(&self, user_id: &UserId) -> Result<Option<UserAggregate>> {
        Ok(self.aggregates.read().await.get(user_id).copied())
    }

    async fn set_aggregate(&self, user_id: &UserId, aggregate: UserAggregate) -> Result<()> {
        self.aggregates
            .write()
            .await
            .insert(user_id.clone(), aggregate);
        Ok(())
    }

    async fn append_record(&self, key: &str, record: OutcomeRecord) -> Result<()> {
        self.records.write().await.insert(key.to_string(), record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libro_types::Title;

    #[tokio::test]
    async fn test_aggregate_roundtrip() {
        let store = MemoryStore::new();
        let user = UserId::new("u1");

        assert!(store.get_aggregate(&user).await.unwrap().is_none());

        let aggregate = UserAggregate { wins: 2, losses: 1 };
        store.set_aggregate(&user, aggregate).await.unwrap();
        assert_eq!(store.get_aggregate(&user).await.unwrap(), Some(aggregate));
    }

    #[tokio::test]
    async fn test_append_record_overwrites_on_same_key() {
        let store = MemoryStore::new();
        let title = Title::new("CAT").unwrap();

        let first = OutcomeRecord::new(UserId::new("u1"), &title, true);
        let mut second = first.clone();
        second.correct = false;

        store.append_record("u1_k", first).await.unwrap();
        store.append_record("u1_k", second.clone()).await.unwrap();

        assert_eq!(store.record_count().await, 1);
        assert_eq!(store.records().await[0].correct, second.correct);
    }
}
