//! Bar-chart data derived from the submission state, plus the process-wide
//! chart defaults that renderers read.

use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

use crate::state::SubmissionState;

pub const CATEGORY_LABEL: &str = "Predicted Price";
pub const DATASET_LABEL: &str = "Price (Frw)";

/// Single-category bar series. Never stored, rebuilt from the state on every
/// render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub category_label: &'static str,
    pub dataset_label: &'static str,
    pub values: [f64; 1],
}

impl ChartSeries {
    /// The displayed predicted price (also while reloading), `0` otherwise.
    pub fn from_state(state: &SubmissionState) -> Self {
        Self {
            category_label: CATEGORY_LABEL,
            dataset_label: DATASET_LABEL,
            values: [state.predicted_price().unwrap_or(0.0)],
        }
    }

    pub fn value(&self) -> f64 {
        self.values[0]
    }
}

/// Styling shared by every bar chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDefaults {
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u32,
    pub begin_at_zero: bool,
    pub responsive: bool,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            background_color: "rgba(75, 192, 192, 0.2)",
            border_color: "rgba(75, 192, 192, 1)",
            border_width: 1,
            begin_at_zero: true,
            responsive: true,
        }
    }
}

static CHART_DEFAULTS: OnceLock<ChartDefaults> = OnceLock::new();

/// Registers the chart defaults. Call once before the first render; later
/// calls do nothing. Returns `true` only for the call that registered.
pub fn register_chart_defaults() -> bool {
    register_into(&CHART_DEFAULTS)
}

fn register_into(cell: &OnceLock<ChartDefaults>) -> bool {
    let mut registered = false;
    cell.get_or_init(|| {
        registered = true;
        debug!("Registering bar chart defaults");
        ChartDefaults::default()
    });
    registered
}

/// Registered defaults, registering them first if nobody has yet.
pub fn chart_defaults() -> &'static ChartDefaults {
    register_chart_defaults();
    CHART_DEFAULTS.get_or_init(ChartDefaults::default)
}
