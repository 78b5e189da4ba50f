//! Error types for the optimization pipeline.

use thiserror::Error;

use crate::validation::ValidationError;

/// Precondition violations on `optimize` arguments other than task data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("at least one resource is required")]
    EmptyResources,

    #[error("duplicate resource name: {0}")]
    DuplicateResource(String),
}

/// Error returned by `optimize`.
///
/// No partial schedule accompanies an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    #[error("invalid tasks: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl OptimizeError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            OptimizeError::Validation(errors) => errors,
            OptimizeError::Input(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for OptimizeError {
    fn from(errors: Vec<ValidationError>) -> Self {
        OptimizeError::Validation(errors)
    }
}

impl From<ValidationError> for OptimizeError {
    fn from(error: ValidationError) -> Self {
        OptimizeError::Validation(vec![error])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
