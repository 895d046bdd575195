pub use super::aggregates::Entity as Aggregates;
pub use super::outcome_records::Entity as OutcomeRecords;
