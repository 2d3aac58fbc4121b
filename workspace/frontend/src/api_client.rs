use common::{interpret_response, FormFields, PredictionError, PredictionService};
use gloo_net::http::Request;

use crate::settings;

/// Browser client for the prediction endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionClient {
    endpoint: String,
}

impl PredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Client for the endpoint configured in the global settings.
    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().prediction_endpoint)
    }
}

impl PredictionService for PredictionClient {
    async fn predict(&self, fields: &FormFields) -> Result<f64, PredictionError> {
        log::debug!("POST request to: {}", self.endpoint);

        let response = Request::post(&self.endpoint)
            .json(fields)
            .map_err(|e| {
                let error_msg = format!("Failed to serialize request: {}", e);
                log::error!("POST {} - {}", self.endpoint, error_msg);
                PredictionError::Network(error_msg)
            })?
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Request failed: {}", e);
                log::error!("POST {} - {}", self.endpoint, error_msg);
                PredictionError::Network(error_msg)
            })?;

        let status = response.status();
        log::trace!("POST {} - Response {} received, reading body", self.endpoint, status);
        let body = response.text().await.map_err(|e| {
            let error_msg = format!("Failed to read response body: {}", e);
            log::error!("POST {} - {}", self.endpoint, error_msg);
            PredictionError::MalformedBody(error_msg)
        })?;

        let result = interpret_response(status, &body);
        match &result {
            Ok(price) => log::info!("POST {} - Success, predicted price {}", self.endpoint, price),
            Err(e) => log::error!("POST {} - {}", self.endpoint, e),
        }
        result
    }
}
