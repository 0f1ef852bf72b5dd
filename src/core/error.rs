use thiserror::Error;

/// Errors surfaced by the register and its stores.
///
/// Pricing and rendering are total over well-formed input and return no
/// errors of their own.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegisterError {
    /// A referenced entity does not exist in its store.
    #[error("{entity} with id {id} does not exist")]
    NotFound {
        /// Entity kind, e.g. "product".
        entity: &'static str,
        /// The id that was looked up.
        id: u64,
    },

    /// An entity failed required-field validation on creation.
    #[error("invalid entity: {0}")]
    InvalidEntity(String),

    /// Configuration could not be loaded or parsed. Non-fatal at the
    /// application level — callers fall back to defaults.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A single create-time validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "position.quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl RegisterError {
    /// Join validation errors into one [`RegisterError::InvalidEntity`].
    pub(crate) fn invalid_entity(errors: Vec<ValidationError>) -> Self {
        let msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Self::InvalidEntity(msg)
    }
}
