use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::entities::{aggregates, outcome_records, prelude::*};
use crate::store::DocumentStore;
use libro_types::{OutcomeRecord, UserAggregate, UserId};

/// Document store backed by a SQL database through sea-orm. Each table row
/// is one document; inserts upsert so that a key collision keeps the last
/// write, matching the remote store's semantics.
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for SqlStore {
    async fn get_aggregate(&self, user_id: &UserId) -> Result<Option<UserAggregate>> {
        let model = Aggregates::find_by_id(user_id.as_str()).one(&self.db).await?;
        Ok(model.map(|m| UserAggregate {
            wins: m.wins as u32,
            losses: m.losses as u32,
        }))
    }

    async fn set_aggregate(&self, user_id: &UserId, aggregate: UserAggregate) -> Result<()> {
        let row = aggregates::ActiveModel {
            user_id: ActiveValue::Set(user_id.as_str().to_owned()),
            wins: ActiveValue::Set(aggregate.wins as i32),
            losses: ActiveValue::Set(aggregate.losses as i32),
            updated_at: ActiveValue::Set(Utc::now().into()),
        };

        Aggregates::insert(row)
            .on_conflict(
                OnConflict::column(aggregates::Column::UserId)
                    .update_columns([
                        aggregates::Column::Wins,
                        aggregates::Column::Losses,
                        aggregates::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn append_record(&self, key: &str, record: OutcomeRecord) -> Result<()> {
        let row = outcome_records::ActiveModel {
            key: ActiveValue::Set(key.to_owned()),
            user_id: ActiveValue::Set(record.user_id.as_str().to_owned()),
            title: ActiveValue::Set(record.title),
            correct: ActiveValue::Set(record.correct),
            recorded_at: ActiveValue::Set(record.timestamp.into()),
        };

        OutcomeRecords::insert(row)
            .on_conflict(
                OnConflict::column(outcome_records::Column::Key)
                    .update_columns([
                        outcome_records::Column::Title,
                        outcome_records::Column::Correct,
                        outcome_records::Column::RecordedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }
}
