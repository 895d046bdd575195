use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aggregates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Aggregates::UserId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Aggregates::Wins)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Aggregates::Losses)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Aggregates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OutcomeRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OutcomeRecords::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OutcomeRecords::UserId).string().not_null())
                    .col(ColumnDef::new(OutcomeRecords::Title).string().not_null())
                    .col(ColumnDef::new(OutcomeRecords::Correct).boolean().not_null())
                    .col(
                        ColumnDef::new(OutcomeRecords::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for per-user history queries
        manager
            .create_index(
                Index::create()
                    .name("idx_outcome_records_user_id")
                    .table(OutcomeRecords::Table)
                    .col(OutcomeRecords::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OutcomeRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Aggregates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Aggregates {
    Table,
    UserId,
    Wins,
    Losses,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum OutcomeRecords {
    Table,
    Key,
    UserId,
    Title,
    Correct,
    RecordedAt,
}
