// Core error types shared across the crate
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
