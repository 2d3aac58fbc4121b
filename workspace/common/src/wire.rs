//! Payloads exchanged with the prediction service.
//!
//! The request body is [`FormFields`](crate::FormFields) itself. Both HTTP
//! clients (browser and native) hand the raw status and body to
//! [`interpret_response`] so they classify failures identically.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::PredictionError;

/// Key of the price in a successful reply. Other keys are ignored.
pub const PRICE_KEY: &str = "predicted_price";

/// Error body the service sends with 4xx/5xx replies. Only ever logged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceErrorBody {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Turns an HTTP status and body into a price or a [`PredictionError`].
pub fn interpret_response(status: u16, body: &str) -> Result<f64, PredictionError> {
    if !(200..300).contains(&status) {
        let detail = match serde_json::from_str::<ServiceErrorBody>(body) {
            Ok(err) => {
                if let Some(details) = &err.details {
                    debug!(status, details = %details, "Prediction service error details");
                }
                err.error
            }
            Err(_) => body.chars().take(200).collect(),
        };
        warn!(status, detail = %detail, "Prediction service returned an error status");
        return Err(PredictionError::Status { status, detail });
    }

    let value: Value = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Failed to parse prediction response");
        PredictionError::MalformedBody(e.to_string())
    })?;

    // Only a JSON object carrying a numeric price counts as a prediction.
    let Some(object) = value.as_object() else {
        warn!("Prediction response is not a JSON object");
        return Err(PredictionError::MalformedBody("response is not a JSON object".to_string()));
    };
    let price = object.get(PRICE_KEY).and_then(Value::as_f64).ok_or_else(|| {
        warn!("Prediction response has no numeric {}", PRICE_KEY);
        PredictionError::MalformedBody(format!("missing or non-numeric `{}`", PRICE_KEY))
    })?;

    debug!(price, "Prediction response parsed");
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_yields_price() {
        assert_eq!(interpret_response(200, r#"{"predicted_price": 12345}"#), Ok(12345.0));
        assert_eq!(
            interpret_response(201, r#"{"predicted_price": 99.5, "model": "linear"}"#),
            Ok(99.5)
        );
    }

    #[test]
    fn test_error_status_is_failure_even_with_price() {
        let result = interpret_response(500, r#"{"predicted_price": 10}"#);
        assert!(matches!(result, Err(PredictionError::Status { status: 500, .. })));
    }

    #[test]
    fn test_service_error_body_is_used_as_detail() {
        let body = r#"{"error": "Missing features: ['Brand']"}"#;
        let result = interpret_response(400, body);
        assert_eq!(
            result,
            Err(PredictionError::Status {
                status: 400,
                detail: "Missing features: ['Brand']".to_string(),
            })
        );
    }

    #[test]
    fn test_array_body_is_not_a_prediction() {
        let result = interpret_response(200, "[8500]");
        assert_eq!(
            result,
            Err(PredictionError::MalformedBody("response is not a JSON object".to_string()))
        );
    }

    #[test]
    fn test_malformed_bodies_are_failures() {
        for body in [
            "",
            "not json",
            "{}",
            r#"{"predicted_price": "8500"}"#,
            r#"{"predicted_price": null}"#,
            r#"[8500]"#,
            r#"[{"predicted_price": 8500}]"#,
            "8500",
            r#"{"predicted_price": {"value": 8500}}"#,
        ] {
            assert!(
                matches!(interpret_response(200, body), Err(PredictionError::MalformedBody(_))),
                "body {:?} should be rejected",
                body
            );
        }
    }
}
