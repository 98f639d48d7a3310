//! MongoDB connection management and read operations.
//!
//! This module provides:
//! - `ConnectionManager`: the Tokio runtime owner, connecting and listing
//! - `ops`: the read-only document streaming the inspection reports run on
//!
//! Nothing in here can write. The inspection commands are a read path from
//! the first byte to the last, and the module surface keeps it that way.

pub mod manager;
pub mod ops;

// Re-export commonly used items at the crate level
pub use manager::ConnectionManager;
