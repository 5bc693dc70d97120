pub mod error_handling;
pub mod errors;

// Re-export commonly used types
pub use errors::{Result, SeekBarError};
