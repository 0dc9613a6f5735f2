//! Domain layer for PhenoSelect.
//!
//! Contains the session state machine, the catalog of selectable entities,
//! the remote service contracts, and the terms-of-use navigation gate. No
//! I/O happens in this crate.

pub mod config;
pub mod error;
pub mod navigation;
pub mod registry;
pub mod service;
pub mod session;

// Re-export common error types
pub use error::{PhenoError, ServiceError};
