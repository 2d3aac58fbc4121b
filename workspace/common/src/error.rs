use thiserror::Error;

use crate::state::FAILURE_MESSAGE;

/// Why a prediction request failed.
///
/// The variants exist for diagnostics only. Whatever the cause, the user is
/// shown [`PredictionError::user_message`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The request never produced a response (connection refused, timeout, CORS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("Prediction service returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// A 2xx response whose body has no usable `predicted_price`.
    #[error("Malformed prediction response: {0}")]
    MalformedBody(String),
}

impl PredictionError {
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}
