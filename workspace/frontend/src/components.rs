pub mod prediction_form;
pub mod price_chart;

pub use prediction_form::PredictionForm;
