//! Error taxonomy for the analytics engine.
//!
//! Only `Precondition` is ever returned as a hard failure from a top-level
//! computation. The other variants describe why a value was dropped or left
//! absent and travel inside results (rejected entries) or back to the caller
//! of a single-purpose function such as [`crate::core::macros::recommend`].

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticsError {
    /// Entry has a malformed date or value; it is dropped, aggregation continues.
    #[error("invalid entry {id}: {reason}")]
    InvalidEntry { id: String, reason: String },

    /// Profile lacks a measurement the recommendation needs.
    #[error("incomplete profile: missing {}", missing.join(", "))]
    IncompleteProfile { missing: Vec<&'static str> },

    /// Not enough points to compute a value.
    #[error("insufficient data: need {required}, have {available}")]
    InsufficientData { required: usize, available: usize },

    /// Programmer error in the inputs; fail fast.
    #[error("precondition violated: {0}")]
    Precondition(String),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
