//! Platform-neutral core of the toy price predictor.
//!
//! Everything the prediction page does that is not drawing pixels or talking
//! HTTP lives here, so the browser frontend and the command-line client share
//! one form model, one submit lifecycle and one set of visibility rules.

mod chart;
mod controller;
mod error;
mod fields;
mod state;
mod view;
mod wire;

pub use chart::{
    chart_defaults, register_chart_defaults, ChartDefaults, ChartSeries, CATEGORY_LABEL,
    DATASET_LABEL,
};
pub use controller::{PredictionFormController, PredictionService, SubmitTicket};
pub use error::PredictionError;
pub use fields::{FieldKey, FormFields, InputKind};
pub use state::{format_price, Outcome, SubmissionState, CURRENCY, FAILURE_MESSAGE};
pub use view::{render, FormView, InputView, ResultPanel, SubmitView, LOADING_LABEL, SUBMIT_LABEL};
pub use wire::{interpret_response, ServiceErrorBody, PRICE_KEY};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";
