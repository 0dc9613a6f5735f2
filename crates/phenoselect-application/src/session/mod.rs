//! Session application services.
//!
//! This module contains the owner of the session state (`SessionStore`) and
//! the factory wiring a use case to concrete service clients.

mod factory;
mod store;

pub use factory::SessionFactory;
pub use store::SessionStore;
