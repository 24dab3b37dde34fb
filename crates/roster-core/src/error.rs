//! Error types for the trip roster
//!
//! Provides typed results for:
//! - Mutations attempted while the gate is locked
//! - Edits and deletes that reference an unknown record
//! - Field names that do not resolve
//!
//! Wrong secrets and malformed day-count tokens are deliberately not errors;
//! the gate ignores the former and normalization filters the latter.

use crate::types::RecordId;

/// Main roster error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// Mutation attempted before the gate was unlocked
    #[error("session is locked")]
    Locked,

    /// No record with the given id
    #[error("no record with id {id}")]
    RecordNotFound {
        /// The id that failed to resolve
        id: RecordId,
    },

    /// Field name did not resolve to an editable field
    #[error("unknown field: {0}")]
    UnknownField(String),
}

impl RosterError {
    /// Check if the error is the gate refusing a mutation
    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }

    /// Check if the error names a missing record
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }
}
