use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Invalid item count: {n} (must be a positive integer)")]
    InvalidCount { n: i64 },

    #[error("Expected an even number of values, got {n_more} + {n_less}")]
    OddStripeTotal { n_more: usize, n_less: usize },

    /// A striping helper was handed counts it can never produce a layout for.
    /// Reaching this means the caller computed its row counts incorrectly.
    #[error("Striping invariant violated: {message}")]
    StripeInvariant { message: String },

    #[error("Arrangement has no rows or contains an empty row")]
    EmptyRow,

    #[error("Unknown strategy: {0}. Must be 'square' or 'rectangular'")]
    UnknownStrategy(String),

    #[error("Unknown alignment: {0}. Must be 'center', 'left', 'right', or 'justified'")]
    UnknownAlignment(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GridError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        GridError::StripeInvariant {
            message: message.into(),
        }
    }

    /// True for internal consistency failures, false for bad caller input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, GridError::StripeInvariant { .. })
    }
}
