//! single-attempt submission to the report endpoint

use snafu::{ensure, ResultExt};

use crate::data::RosReport;
use crate::error::{Error, RejectedSnafu, TransportSnafu};

/// Endpoint the pipeline posts to when none is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/ros";

#[derive(Debug, Clone)]
pub struct Submitter {
    client: reqwest::Client,
    endpoint: String,
}

impl Submitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// One POST of the serialized document, no retries. A success status with
    /// an empty or non-JSON body still counts as success with an empty
    /// result; some backends acknowledge without a payload.
    pub async fn submit(&self, reporte: &RosReport) -> Result<serde_json::Value, Error> {
        tracing::debug!(endpoint = %self.endpoint, "enviando reporte");
        let response = self
            .client
            .post(&self.endpoint)
            .json(reporte)
            .send()
            .await
            .context(TransportSnafu)?;

        let status = response.status();
        let body = response.text().await.context(TransportSnafu)?;
        ensure!(status.is_success(), RejectedSnafu { status, body });

        Ok(serde_json::from_str(&body).unwrap_or_else(|_| serde_json::json!({})))
    }
}
