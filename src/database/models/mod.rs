pub mod leave;
pub(crate) mod macros;

// Re-export all models for easy importing
pub use leave::*;
