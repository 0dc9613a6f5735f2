//! Session domain module.
//!
//! This module contains the session state machine: the catalog entities a
//! user selects, the session state with its mutators, the typed mutation set,
//! and the record shape sent to the logging service.
//!
//! # Module Structure
//!
//! - `model`: Catalog entities (`Term`, `BodySystem`)
//! - `state`: Session state and mutators (`SessionState`)
//! - `app_state`: Session plus terms-of-use flag (`AppState`)
//! - `mutation`: Closed set of state operations (`Mutation`)
//! - `record`: Logging wire format (`SessionRecord`)

mod app_state;
mod model;
mod mutation;
mod record;
mod state;

// Re-export public API
pub use app_state::AppState;
pub use model::{BodySystem, Term};
pub use mutation::Mutation;
pub use record::{RecordedTerm, SessionRecord};
pub use state::SessionState;
