//! Remote service clients for PhenoSelect.
//!
//! `reqwest`-backed implementations of the scoring and logging contracts
//! defined in `phenoselect_core::service`.

mod http;
pub mod http_logging_service;
pub mod http_scoring_service;

pub use http_logging_service::HttpLoggingService;
pub use http_scoring_service::HttpScoringService;
