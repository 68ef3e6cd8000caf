//! Submission orchestrator
//!
//! Owns the single [`SubmissionState`] and drives one submission at a time:
//! validate the form, call the calculation service, publish the settled state
//! and, on success only, emit [`UiEffect::ScrollToResult`].
//!
//! The state is published through a `watch` channel (one writer, any number of
//! readers). Effects go through a `broadcast` channel so a presentation layer
//! can react to them independently of rendering.

pub mod state;

pub use state::{SubmissionFailure, SubmissionState, SubmitOutcome, UiEffect};

use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

use crate::client::CalculationClient;
use crate::error::NetworkError;
use crate::models::{Field, FormState, ValidationErrors};
use crate::validation;

const EFFECT_CHANNEL_CAPACITY: usize = 16;

pub struct SubmissionOrchestrator<C> {
    client: C,
    state: watch::Sender<SubmissionState>,
    effects: broadcast::Sender<UiEffect>,
}

impl<C: CalculationClient> SubmissionOrchestrator<C> {
    pub fn new(client: C) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        let (effects, _) = broadcast::channel(EFFECT_CHANNEL_CAPACITY);

        Self {
            client,
            state,
            effects,
        }
    }

    /// Observe state transitions
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Observe one-shot UI effects emitted after subscribing
    pub fn subscribe_effects(&self) -> broadcast::Receiver<UiEffect> {
        self.effects.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Field errors currently visible to the user
    pub fn validation_errors(&self) -> ValidationErrors {
        self.state
            .borrow()
            .validation_errors()
            .cloned()
            .unwrap_or_default()
    }

    /// Run one submission attempt
    ///
    /// The form is taken by value, so edits made after this call cannot leak
    /// into the attempt. Rejected without side effects while another attempt
    /// is in flight. Never fails: every outcome is expressed as state. If the
    /// returned future is dropped before it completes, the attempt settles as
    /// a cancelled transport failure.
    pub async fn submit(&self, form: FormState) -> SubmitOutcome {
        let Some(attempt) = self.begin() else {
            debug!("Submission already in flight, ignoring submit");
            return SubmitOutcome::Rejected;
        };

        let input = match validation::validate(&form) {
            Ok(input) => input,
            Err(errors) => {
                warn!(
                    error_count = errors.len(),
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "Form validation failed"
                );
                return attempt.settle(SubmissionState::Failed(SubmissionFailure::Validation(errors)));
            }
        };

        info!(
            battery_size = input.battery_size(),
            chargers = input.amount_of_chargers(),
            start_time = input.start_time(),
            end_time = input.end_time(),
            "Submitting calculation request"
        );

        match self.client.fetch_calculation(&input).await {
            Ok(result) => {
                info!(
                    smart_charging_cost = result.smart_charging_cost,
                    fever_cost = result.fever_cost,
                    "Calculation succeeded"
                );
                let outcome = attempt.settle(SubmissionState::Succeeded(result));
                // No receivers is fine, the effect is simply dropped
                let _ = self.effects.send(UiEffect::ScrollToResult);
                outcome
            }
            Err(err) => {
                error!(
                    kind = err.kind(),
                    status = ?err.status(),
                    error = %err,
                    "Calculation request failed"
                );
                attempt.settle(SubmissionState::Failed(SubmissionFailure::Network(err)))
            }
        }
    }

    /// Clear one field's validation error after the user edits it
    ///
    /// Only acts on a validation failure; other fields keep their errors and
    /// nothing is re-validated. Returns whether an error was cleared.
    pub fn field_edited(&self, field: Field) -> bool {
        let cleared = self.state.send_if_modified(|state| match state {
            SubmissionState::Failed(SubmissionFailure::Validation(errors)) => {
                errors.clear_field(field)
            }
            _ => false,
        });

        if !cleared {
            debug!(field = %field, "Field edit left state unchanged");
        }
        cleared
    }

    /// Return to `Idle`, dropping any errors or result
    ///
    /// Ignored while a submission is in flight; returns whether the reset was
    /// accepted.
    pub fn reset(&self) -> bool {
        let mut accepted = true;

        self.state.send_if_modified(|state| match state {
            SubmissionState::Submitting => {
                accepted = false;
                false
            }
            SubmissionState::Idle => false,
            _ => {
                *state = SubmissionState::Idle;
                true
            }
        });

        if !accepted {
            debug!("Submission in flight, ignoring reset");
        }
        accepted
    }

    /// Enter `Submitting` unless already there
    fn begin(&self) -> Option<InFlight<'_>> {
        let entered = self.state.send_if_modified(|state| {
            if state.is_submitting() {
                false
            } else {
                *state = SubmissionState::Submitting;
                true
            }
        });

        entered.then(|| InFlight {
            state: &self.state,
            settled: false,
        })
    }
}

/// The attempt currently holding `Submitting`
///
/// Dropping it unsettled moves the state out of `Submitting`, so a cancelled
/// `submit` cannot lock out later ones.
struct InFlight<'a> {
    state: &'a watch::Sender<SubmissionState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, next: SubmissionState) -> SubmitOutcome {
        self.settled = true;
        debug!(state = next.as_str(), "Submission settled");
        self.state.send_replace(next.clone());
        SubmitOutcome::Settled(next)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        warn!("Submission dropped before completing, marking it cancelled");
        self.state.send_if_modified(|state| {
            if !state.is_submitting() {
                return false;
            }
            *state = SubmissionState::Failed(SubmissionFailure::Network(NetworkError::Transport(
                "cancelled".to_string(),
            )));
            true
        });
    }
}
