//! Native HTTP client for the prediction endpoint.

use common::{interpret_response, FormFields, PredictionError, PredictionService};
use reqwest::{Client, Url};
use tracing::{debug, error, info, instrument};

use crate::config::Settings;

/// POSTs form snapshots to one fixed endpoint. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: Client,
    endpoint: Url,
}

impl HttpPredictionClient {
    /// # Errors
    ///
    /// Fails if the underlying `reqwest::Client` cannot be constructed.
    pub fn new(settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("toyprice/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl PredictionService for HttpPredictionClient {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn predict(&self, fields: &FormFields) -> Result<f64, PredictionError> {
        debug!("POST request to: {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(fields)
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {}", e);
                PredictionError::Network(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            PredictionError::MalformedBody(e.to_string())
        })?;

        let result = interpret_response(status, &body);
        if let Ok(price) = &result {
            info!(status, price, "Prediction received");
        }
        result
    }
}
