pub mod connection;
pub mod entities;
pub mod memory;
pub mod repositories;
pub mod sql;
pub mod store;

pub use memory::MemoryStore;
pub use repositories::ResultStore;
pub use sql::SqlStore;
pub use store::{DocumentStore, PersistenceError};
