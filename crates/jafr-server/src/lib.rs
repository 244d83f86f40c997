//! # jafr-server
//!
//! Analysis orchestration and the HTTP API for Jafr.
//!
//! - [`analysis`]: validation, credential checks, traditional numerology,
//!   and one bounded oracle call per request
//! - [`prompt`]: prompt rendering and narrative section parsing
//! - [`server`]: axum router, handlers, and the serve loop
//! - [`error`]: request-level errors and their HTTP mapping

pub mod analysis;
pub mod error;
pub mod prompt;
pub mod server;

mod test_support;

pub use analysis::Analyzer;
pub use error::{AnalysisError, ServeError};
pub use server::{AppState, create_router, run};
