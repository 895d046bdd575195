pub mod catalog;
pub mod config;
pub mod controller;
pub mod identity;

pub use catalog::{CatalogError, CatalogSource, GutendexClient};
pub use config::Config;
pub use controller::{SessionController, SessionError};
pub use identity::{IdentityProvider, StaticIdentity};
