use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::{error::BackendError, request::QueryParams};

pub mod http;

pub use http::HttpBackend;

/// Default prediction endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://pi-backend-api.herokuapp.com/pi";

/// Source of potential-intensity predictions.
///
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait PredictionBackend: Send + Sync + Debug {
    async fn get_predictions(&self, params: &QueryParams) -> Result<Value, BackendError>;
}
