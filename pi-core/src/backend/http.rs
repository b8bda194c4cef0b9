use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{error::BackendError, request::QueryParams};

use super::PredictionBackend;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoint: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionBackend for HttpBackend {
    async fn get_predictions(&self, params: &QueryParams) -> Result<Value, BackendError> {
        tracing::debug!(endpoint = %self.endpoint, ?params, "requesting predictions");

        let res = self
            .http
            .get(&self.endpoint)
            .query(params)
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| BackendError::Body {
            url: self.endpoint.clone(),
            source,
        })?;

        if status != StatusCode::OK {
            return Err(BackendError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(BackendError::Decode)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
