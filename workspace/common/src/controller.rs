//! Form state and submit lifecycle of the prediction page.

use tracing::{debug, info, warn};

use crate::chart::ChartSeries;
use crate::error::PredictionError;
use crate::fields::{FieldKey, FormFields};
use crate::state::{Outcome, SubmissionState};
use crate::view::{render, FormView};

/// Something that can price a toy. The browser and native HTTP clients both
/// implement this; tests use in-memory fakes.
///
/// The returned future is not required to be `Send` so that browser futures
/// (which are `!Send`) can implement it.
#[allow(async_fn_in_trait)]
pub trait PredictionService {
    /// Issues exactly one request for `fields`. Implementations never retry.
    async fn predict(&self, fields: &FormFields) -> Result<f64, PredictionError>;
}

/// Identifies one submit. Only the ticket currently in flight can settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionFormController {
    fields: FormFields,
    state: SubmissionState,
    in_flight: Option<SubmitTicket>,
    next_ticket: u64,
    mounted: bool,
}

impl Default for PredictionFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionFormController {
    /// Empty form, `Idle`, mounted.
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            state: SubmissionState::Idle,
            in_flight: None,
            next_ticket: 0,
            mounted: true,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Replaces one field. Allowed in every phase, including while loading.
    pub fn update_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.fields.set(key, value);
    }

    /// Enters `Loading` and hands back the ticket plus the snapshot to send.
    ///
    /// Returns `None` while a request is already in flight (or after
    /// unmount); the caller must not issue a request in that case.
    pub fn begin_submit(&mut self) -> Option<(SubmitTicket, FormFields)> {
        if !self.mounted {
            debug!("Submit ignored, form is unmounted");
            return None;
        }
        if self.in_flight.is_some() {
            debug!("Submit ignored, prediction already in flight");
            return None;
        }

        let ticket = SubmitTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.state = self.state.to_loading();
        debug!(ticket = ticket.0, "Prediction submit started");

        Some((ticket, self.fields.clone()))
    }

    /// Applies the result of the request identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched if the form is
    /// unmounted or the ticket is not the one in flight (already settled or
    /// never issued).
    pub fn settle(&mut self, ticket: SubmitTicket, result: Result<f64, PredictionError>) -> bool {
        if !self.mounted {
            debug!(ticket = ticket.0, "Discarding prediction result for unmounted form");
            return false;
        }
        if self.in_flight != Some(ticket) {
            warn!(ticket = ticket.0, "Discarding prediction result for a submit that is not in flight");
            return false;
        }

        self.in_flight = None;
        self.state = match result {
            Ok(predicted_price) => {
                info!(predicted_price, "Prediction succeeded");
                SubmissionState::Settled(Outcome::Success { predicted_price })
            }
            Err(err) => {
                warn!(error = %err, "Prediction failed");
                SubmissionState::Settled(Outcome::Failure {
                    message: err.user_message().to_string(),
                })
            }
        };
        true
    }

    /// Marks the enclosing view as gone. Later settlements are no-ops.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Begin, await `service`, settle. Returns `false` if no request was
    /// issued because one was already in flight.
    pub async fn submit<S: PredictionService>(&mut self, service: &S) -> bool {
        let Some((ticket, snapshot)) = self.begin_submit() else {
            return false;
        };
        let result = service.predict(&snapshot).await;
        self.settle(ticket, result)
    }

    pub fn view(&self) -> FormView {
        render(&self.fields, &self.state)
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries::from_state(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FAILURE_MESSAGE;
    use std::cell::RefCell;

    /// Returns canned results in order and records every request.
    struct FakeService {
        results: RefCell<Vec<Result<f64, PredictionError>>>,
        requests: RefCell<Vec<FormFields>>,
    }

    impl FakeService {
        fn new(results: Vec<Result<f64, PredictionError>>) -> Self {
            Self {
                results: RefCell::new(results.into_iter().rev().collect()),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl PredictionService for FakeService {
        async fn predict(&self, fields: &FormFields) -> Result<f64, PredictionError> {
            self.requests.borrow_mut().push(fields.clone());
            self.results
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(PredictionError::Network("no canned result".into())))
        }
    }

    fn failure() -> SubmissionState {
        SubmissionState::Settled(Outcome::Failure {
            message: FAILURE_MESSAGE.to_string(),
        })
    }

    #[test]
    fn test_begin_submit_enters_loading_before_settlement() {
        let mut controller = PredictionFormController::new();
        let (ticket, snapshot) = controller.begin_submit().expect("submit should start");

        assert_eq!(controller.state(), &SubmissionState::Loading { previous_price: None });
        assert_eq!(snapshot, FormFields::default());
        assert!(controller.view().submit.disabled);

        assert!(controller.settle(ticket, Ok(1.0)));
        assert!(!controller.state().is_loading());
    }

    #[test]
    fn test_second_submit_is_rejected_while_loading() {
        let mut controller = PredictionFormController::new();
        let (ticket, _) = controller.begin_submit().unwrap();

        assert!(controller.begin_submit().is_none());
        assert!(controller.state().is_loading());

        controller.settle(ticket, Ok(5.0));
        assert!(controller.begin_submit().is_some());
    }

    #[test]
    fn test_settles_exactly_once() {
        let mut controller = PredictionFormController::new();
        let (ticket, _) = controller.begin_submit().unwrap();

        assert!(controller.settle(ticket, Ok(12345.0)));
        assert!(!controller.settle(ticket, Err(PredictionError::Network("late".into()))));
        assert_eq!(controller.state().predicted_price(), Some(12345.0));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut controller = PredictionFormController::new();
        let (first, _) = controller.begin_submit().unwrap();
        controller.settle(first, Ok(1.0));
        let (_second, _) = controller.begin_submit().unwrap();

        assert!(!controller.settle(first, Ok(2.0)));
        assert_eq!(controller.state(), &SubmissionState::Loading { previous_price: Some(1.0) });
    }

    #[test]
    fn test_fields_editable_while_loading() {
        let mut controller = PredictionFormController::new();
        let (_ticket, snapshot) = controller.begin_submit().unwrap();
        controller.update_field(FieldKey::Brand, "Acme");

        assert_eq!(controller.fields().get(FieldKey::Brand), "Acme");
        assert_eq!(snapshot.get(FieldKey::Brand), "");
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_result_after_unmount_is_discarded() {
        let mut controller = PredictionFormController::new();
        let (ticket, _) = controller.begin_submit().unwrap();
        controller.unmount();

        assert!(!controller.settle(ticket, Ok(10.0)));
        assert!(controller.state().is_loading());
        assert!(controller.begin_submit().is_none());
    }

    #[tokio::test]
    async fn test_submit_success() {
        let service = FakeService::new(vec![Ok(12345.0)]);
        let mut controller = PredictionFormController::new();

        assert!(controller.submit(&service).await);
        assert_eq!(
            controller.state(),
            &SubmissionState::Settled(Outcome::Success { predicted_price: 12345.0 })
        );
        assert_eq!(controller.chart_series().values, [12345.0]);
        assert_eq!(service.requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_failures_use_fixed_message() {
        let causes = [
            PredictionError::Network("connection refused".into()),
            PredictionError::Status { status: 503, detail: "unavailable".into() },
            PredictionError::MalformedBody("missing field `predicted_price`".into()),
        ];

        for cause in causes {
            let service = FakeService::new(vec![Err(cause)]);
            let mut controller = PredictionFormController::new();
            controller.submit(&service).await;

            assert_eq!(controller.state(), &failure());
            assert_eq!(controller.chart_series().values, [0.0]);
        }
    }

    #[tokio::test]
    async fn test_failure_clears_previous_price() {
        let service = FakeService::new(vec![
            Ok(700.0),
            Err(PredictionError::Network("down".into())),
        ]);
        let mut controller = PredictionFormController::new();

        controller.submit(&service).await;
        assert!(controller.view().result_panel.is_some());

        controller.submit(&service).await;
        let view = controller.view();
        assert!(view.result_panel.is_none());
        assert_eq!(view.error_panel.as_deref(), Some(FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_previous_price_stays_visible_while_loading() {
        let service = FakeService::new(vec![Ok(8500.0), Ok(9000.0)]);
        let mut controller = PredictionFormController::new();
        controller.submit(&service).await;

        let (ticket, _) = controller.begin_submit().unwrap();
        let view = controller.view();
        assert!(view.submit.disabled);
        assert!(view.error_panel.is_none());
        assert_eq!(
            view.result_panel.map(|panel| panel.price_text),
            Some("8500 Frw".to_string())
        );
        assert_eq!(controller.chart_series().values, [8500.0]);

        let result = service.predict(controller.fields()).await;
        assert!(controller.settle(ticket, result));
        assert_eq!(controller.chart_series().values, [9000.0]);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_clears_error_first() {
        let service = FakeService::new(vec![
            Err(PredictionError::Status { status: 500, detail: "boom".into() }),
            Ok(42.0),
        ]);
        let mut controller = PredictionFormController::new();
        controller.submit(&service).await;
        assert_eq!(controller.state(), &failure());

        let (ticket, _) = controller.begin_submit().unwrap();
        assert_eq!(controller.state(), &SubmissionState::Loading { previous_price: None });
        let view = controller.view();
        assert!(view.error_panel.is_none());
        assert!(view.result_panel.is_none());

        let result = service.predict(controller.fields()).await;
        controller.settle(ticket, result);
        assert_eq!(controller.state().predicted_price(), Some(42.0));
    }

    #[tokio::test]
    async fn test_submit_sends_full_snapshot_unvalidated() {
        let service = FakeService::new(vec![Ok(1.0)]);
        let mut controller = PredictionFormController::new();
        controller.update_field(FieldKey::Size, "not a number");
        controller.update_field(FieldKey::Weight, "");
        controller.submit(&service).await;

        let requests = service.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].get(FieldKey::Size), "not a number");
        assert_eq!(requests[0].get(FieldKey::Weight), "");
    }
}
