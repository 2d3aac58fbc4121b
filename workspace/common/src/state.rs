/// Fixed text shown for every failed prediction, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Error predicting toy price. Please try again.";

/// Currency suffix appended to predicted prices.
pub const CURRENCY: &str = "Frw";

/// How the last submit ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success { predicted_price: f64 },
    Failure { message: String },
}

/// Idle/loading/settled lifecycle of one prediction request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A request is in flight. `previous_price` is the last successful price,
    /// kept on display until the new outcome arrives.
    Loading { previous_price: Option<f64> },
    Settled(Outcome),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Price to display: the settled success, or the one still shown while
    /// a new request is loading.
    pub fn predicted_price(&self) -> Option<f64> {
        match self {
            Self::Settled(Outcome::Success { predicted_price }) => Some(*predicted_price),
            Self::Loading { previous_price } => *previous_price,
            _ => None,
        }
    }

    /// The `Loading` state that follows this one. Errors are dropped, the
    /// displayed price is carried over.
    pub fn to_loading(&self) -> Self {
        Self::Loading {
            previous_price: self.predicted_price(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Settled(Outcome::Failure { message }) => Some(message),
            _ => None,
        }
    }
}

/// `8500` becomes `"8500 Frw"`, `12.5` becomes `"12.5 Frw"`.
pub fn format_price(price: f64) -> String {
    format!("{} {}", price, CURRENCY)
}
