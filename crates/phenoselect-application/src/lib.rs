//! Application layer for PhenoSelect.
//!
//! This crate owns the session state at runtime and implements the
//! orchestrations that reconcile remote scoring results back into it.

pub mod session;
pub mod session_usecase;

pub use session::{SessionFactory, SessionStore};
pub use session_usecase::{LoggingErrorCallback, SessionUseCase};
