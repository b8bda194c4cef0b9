//! Core library for the `pi` potential-intensity CLI.
//!
//! This crate defines:
//! - Validation of raw command-line input into a prediction request
//! - The backend abstraction and its HTTP implementation
//! - Projection of backend responses into ledger rows
//! - Ledger (CSV) and run-log (JSON) persistence
//!
//! It is used by `pi-cli`, but the pipeline takes its clock and backend as
//! arguments so other front ends can drive it too.

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod projector;
pub mod request;
pub mod validate;

pub use backend::{HttpBackend, PredictionBackend};
pub use config::Config;
pub use error::{BackendError, OutputError, PipelineError, ProjectionError, ValidationError};
pub use model::{OceanProfile, OutputRecord, PredictionRequest, RawInputs, ValidatedInput};
pub use pipeline::{RunOutcome, run_prediction};
pub use request::QueryParams;
pub use validate::validate;
