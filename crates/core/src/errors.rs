use thiserror::Error;

/// Unified error type for the entire finance-tracker-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Services ────────────────────────────────────────────────────
    /// The only error an entity service raises: the id is not in its collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u32 },

    // ── Startup ─────────────────────────────────────────────────────
    #[error("Invalid fixture data: {0}")]
    Fixture(String),

    #[error("Invalid settings: {0}")]
    Settings(String),

    // ── Consumer-side validation ────────────────────────────────────
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: u32) -> Self {
        CoreError::NotFound { entity, id }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }

    /// `true` for the "record not found" failure of get/update/delete.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}
