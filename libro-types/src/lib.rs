pub mod catalog;
pub mod errors;
pub mod round;
pub mod user;
pub mod view;

// Re-export all types
pub use catalog::*;
pub use errors::*;
pub use round::*;
pub use user::*;
pub use view::*;
