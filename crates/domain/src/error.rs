//! Common error types used across the workspace.
//!
//! Runtime anomalies of the trigger (disconnected sources, bad sensor
//! readings, misconfigured switches) are *not* errors — they are reported
//! as soft [`Issue`](crate::issue::Issue)s so the host can display them.
//! The types here cover genuine misuse, such as constructing an invalid
//! switch handle.

/// Base error enum for the dewguard crates.
#[derive(Debug, thiserror::Error)]
pub enum DewGuardError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name field was empty.
    #[error("name must not be empty")]
    EmptyName,
    /// A switch handle's minimum exceeded its maximum.
    #[error("minimum must not exceed maximum")]
    InvertedRange,
    /// A switch handle's step size was zero or negative.
    #[error("step size must be positive")]
    NonPositiveStep,
}
