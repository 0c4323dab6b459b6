use thiserror::Error;

use crate::Field;

/// Errors raised while writing edited text back into a [`crate::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field is not editable: {0}")]
    NotEditable(Field),
    #[error("Age must be a whole number from 0 to 255, got {0:?}")]
    InvalidAge(String),
}
