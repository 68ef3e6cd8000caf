use crate::error::NetworkError;
use crate::models::{CalculationResult, ValidationErrors};

/// Why a submission attempt failed
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionFailure {
    /// Input was rejected locally; the service was never contacted
    Validation(ValidationErrors),
    /// Service call failed
    Network(NetworkError),
}

/// Lifecycle of the calculator form, as seen by the presentation layer
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(CalculationResult),
    Failed(SubmissionFailure),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// True for `Succeeded` and `Failed`
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Field errors to highlight; empty unless validation failed
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Failed(SubmissionFailure::Validation(errors)) => Some(errors),
            _ => None,
        }
    }

    pub fn network_error(&self) -> Option<&NetworkError> {
        match self {
            Self::Failed(SubmissionFailure::Network(err)) => Some(err),
            _ => None,
        }
    }

    /// Short name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

/// One-shot UI effects emitted by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Bring the result view into focus; sent once per successful submission
    ScrollToResult,
}

/// What happened to a `submit` call
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was in flight; nothing changed
    Rejected,
    /// The attempt ran to completion and left the orchestrator in this state
    Settled(SubmissionState),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
        assert!(!SubmissionState::Idle.is_settled());
    }

    #[test]
    fn test_accessors_match_variant() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::StartTime, "Availability start is required");
        let failed = SubmissionState::Failed(SubmissionFailure::Validation(errors.clone()));

        assert!(failed.is_settled());
        assert_eq!(failed.validation_errors(), Some(&errors));
        assert!(failed.network_error().is_none());
        assert!(failed.result().is_none());

        let network = SubmissionState::Failed(SubmissionFailure::Network(NetworkError::Status(502)));
        assert_eq!(network.network_error(), Some(&NetworkError::Status(502)));
        assert!(network.validation_errors().is_none());
    }
}
