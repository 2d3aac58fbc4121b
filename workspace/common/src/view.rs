//! Pure render derivation: what the page shows for a given form and state.
//!
//! Both the browser components and the command-line printer render from a
//! [`FormView`], so visibility rules live in one place.

use crate::chart::ChartSeries;
use crate::fields::{FieldKey, FormFields, InputKind};
use crate::state::{format_price, SubmissionState};

pub const SUBMIT_LABEL: &str = "Predict";
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub key: FieldKey,
    pub label: String,
    pub placeholder: String,
    pub kind: InputKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitView {
    pub disabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub price_text: String,
    pub chart: ChartSeries,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub inputs: Vec<InputView>,
    pub submit: SubmitView,
    /// Shown exactly when the last settlement was a failure.
    pub error_panel: Option<String>,
    /// Shown when the last settlement was a success, including while a
    /// newer request is loading.
    pub result_panel: Option<ResultPanel>,
}

pub fn render(fields: &FormFields, state: &SubmissionState) -> FormView {
    let inputs = fields
        .iter()
        .map(|(key, value)| InputView {
            key,
            label: key.label(),
            placeholder: key.placeholder(),
            kind: key.input_kind(),
            value: value.to_string(),
        })
        .collect();

    let loading = state.is_loading();
    let submit = SubmitView {
        disabled: loading,
        label: if loading { LOADING_LABEL } else { SUBMIT_LABEL },
    };

    let result_panel = state.predicted_price().map(|price| ResultPanel {
        price_text: format_price(price),
        chart: ChartSeries::from_state(state),
    });

    FormView {
        inputs,
        submit,
        error_panel: state.error_message().map(str::to_string),
        result_panel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Outcome, FAILURE_MESSAGE};

    #[test]
    fn test_idle_view() {
        let view = render(&FormFields::default(), &SubmissionState::Idle);

        assert_eq!(view.inputs.len(), 7);
        assert_eq!(view.inputs[2].key, FieldKey::AgeGroup);
        assert_eq!(view.inputs[2].placeholder, "AGE GROUP");
        assert_eq!(view.inputs[3].kind, InputKind::Number);
        assert_eq!(view.inputs[4].kind, InputKind::Number);
        assert_eq!(view.inputs[5].kind, InputKind::Text);
        assert_eq!(view.submit, SubmitView { disabled: false, label: "Predict" });
        assert!(view.error_panel.is_none());
        assert!(view.result_panel.is_none());
    }

    #[test]
    fn test_first_load_disables_submit_without_panels() {
        let mut fields = FormFields::default();
        fields.set(FieldKey::Brand, "Acme");

        let view = render(&fields, &SubmissionState::Loading { previous_price: None });
        assert_eq!(view.submit, SubmitView { disabled: true, label: "Loading..." });
        assert_eq!(view.inputs[1].value, "Acme");
        assert!(view.error_panel.is_none());
        assert!(view.result_panel.is_none());
    }

    #[test]
    fn test_loading_keeps_previous_result_panel() {
        let view = render(
            &FormFields::default(),
            &SubmissionState::Loading { previous_price: Some(8500.0) },
        );
        assert!(view.submit.disabled);
        assert!(view.error_panel.is_none());

        let panel = view.result_panel.expect("previous price stays visible");
        assert_eq!(panel.price_text, "8500 Frw");
        assert_eq!(panel.chart.values, [8500.0]);
    }

    #[test]
    fn test_success_shows_result_panel() {
        let state = SubmissionState::Settled(Outcome::Success { predicted_price: 8500.0 });
        let view = render(&FormFields::default(), &state);

        let panel = view.result_panel.expect("result panel");
        assert_eq!(panel.price_text, "8500 Frw");
        assert_eq!(panel.chart.values, [8500.0]);
        assert!(view.error_panel.is_none());
        assert!(!view.submit.disabled);
    }

    #[test]
    fn test_failure_shows_error_panel_only() {
        let state = SubmissionState::Settled(Outcome::Failure {
            message: FAILURE_MESSAGE.to_string(),
        });
        let view = render(&FormFields::default(), &state);

        assert_eq!(view.error_panel.as_deref(), Some(FAILURE_MESSAGE));
        assert!(view.result_panel.is_none());
        assert!(!view.submit.disabled);
    }
}
