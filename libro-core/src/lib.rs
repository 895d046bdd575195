pub mod engine;

// Re-export main components
pub use engine::*;
