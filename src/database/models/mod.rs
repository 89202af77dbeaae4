mod macros;

pub mod auth;
pub mod team;

// Re-export all models for easy importing
pub use auth::*;
pub use team::*;
