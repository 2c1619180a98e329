use serde::Serialize;

use super::validation::ValidationError;
use super::verification::VerificationError;

/// A rejected field on a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &'static str, error: &ValidationError) -> Self {
        Self {
            field,
            message: error.to_string(),
        }
    }
}

/// Errors surfaced to the user by a screen; none of them move a flow's cursor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Please fill in all fields correctly before submitting")]
    Incomplete { issues: Vec<FieldIssue> },
    #[error("Please fill in all fields")]
    MissingFields { fields: Vec<&'static str> },
    #[error(transparent)]
    Field(#[from] ValidationError),
    #[error(transparent)]
    Verification(#[from] VerificationError),
    #[error("'{action}' is not available on the {screen} screen")]
    InvalidTransition {
        screen: &'static str,
        action: &'static str,
    },
    #[error("please sign in as {expected} to use this flow")]
    WrongRole { expected: &'static str },
}

impl FlowError {
    pub(crate) fn invalid(screen: &'static str, action: &'static str) -> Self {
        Self::InvalidTransition { screen, action }
    }

    /// Field names a caller can highlight next to the notification.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            FlowError::Incomplete { issues } => issues.iter().map(|issue| issue.field).collect(),
            FlowError::MissingFields { fields } => fields.clone(),
            _ => Vec::new(),
        }
    }
}
