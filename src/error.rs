//! Error taxonomy for editor actions.
//!
//! Every failure a user action can produce maps onto one of the variants of
//! [`PostError`]. Callers catch these at the boundary of the action and turn
//! them into a message; nothing in the library panics on bad input.

use thiserror::Error;

/// Result alias used by all editor-facing operations.
pub type PostResult<T> = Result<T, PostError>;

/// Malformed or out-of-range values supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An item index outside the current item sequence.
    #[error("item index {index} is out of range (have {len} items)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the sequence at the time of the request.
        len: usize,
    },

    /// A style with this name already exists in the collection.
    #[error("a style named '{0}' already exists")]
    DuplicateName(String),

    /// A style or content field holds an unacceptable value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Dotted path of the offending field (e.g. `card.borderWidth`).
        field: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// Grid dimensions outside 1..=4 rows or 1..=3 columns.
    #[error("grid {rows}x{columns} is not allowed (rows 1-4, columns 1-3)")]
    InvalidGrid {
        /// Requested row count.
        rows: u8,
        /// Requested column count.
        columns: u8,
    },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::InvalidField`].
    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Top-level error for every editor action.
#[derive(Debug, Error)]
pub enum PostError {
    /// See [`ValidationError`].
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An imported style did not decode into a complete schema.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// A gated action was attempted without a session.
    #[error("sign in required to {0}")]
    AuthRequired(String),

    /// An authentication or generation call failed.
    #[error("network error: {0}")]
    Network(String),

    /// The render surface could not produce a raster image.
    #[error("render error: {0}")]
    Render(String),

    /// File system and other plumbing failures.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PostError {
    /// Builds a [`PostError::Deserialization`].
    pub fn deserialization(msg: impl Into<String>) -> Self {
        Self::Deserialization(msg.into())
    }

    /// Builds a [`PostError::AuthRequired`] naming the gated action.
    pub fn auth_required(action: impl Into<String>) -> Self {
        Self::AuthRequired(action.into())
    }

    /// Builds a [`PostError::Network`].
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Builds a [`PostError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Returns true for errors caused by user input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Deserialization(_) | Self::AuthRequired(_)
        )
    }
}
