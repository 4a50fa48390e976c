//! Domain outcomes the presentation layer branches on. Plain I/O and parse failures stay
//! `anyhow::Error`.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Why a form submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error("A request is already being sent")]
    InProgress,
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl SubmitError {
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Listing wizard operations refused in the current state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Please upload at least one image for AI analysis")]
    NoImages,
    #[error("Cannot {action} while {state}")]
    WrongState { action: &'static str, state: &'static str },
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_submit_error_display() {
        let mut errors = ValidationErrors::new();
        errors.add("phone", "Phone number must have at least 10 digits");
        let err = SubmitError::from(errors);
        assert_eq!(err.to_string(), "Please correct the errors in the form");
        assert!(err.validation().is_some());

        let err = SubmitError::from(anyhow!("disk full"));
        assert_eq!(err.to_string(), "disk full");
        assert!(err.validation().is_none());
    }

    #[test]
    fn test_wizard_error_display() {
        assert_eq!(
            WizardError::NoImages.to_string(),
            "Please upload at least one image for AI analysis"
        );
        let err = WizardError::WrongState { action: "add photos", state: "analyzing" };
        assert_eq!(err.to_string(), "Cannot add photos while analyzing");
    }
}
