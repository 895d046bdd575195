pub mod aggregates;
pub mod outcome_records;
pub mod prelude;
