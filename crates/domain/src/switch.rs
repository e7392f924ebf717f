//! Switch handle — an externally-owned controllable device that accepts a
//! numeric value within a fixed range.
//!
//! dewguard never talks to the device itself; it only needs the accepted
//! range to validate the configured desired value. The handle is looked up
//! by index from an externally-refreshed [`SwitchList`](crate::switch_list::SwitchList).

use serde::{Deserialize, Serialize};

use crate::error::{DewGuardError, ValidationError};
use crate::id::SwitchId;

/// Operational description of a single writable switch device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchHandle {
    pub id: SwitchId,
    pub name: String,
    /// Smallest value the device accepts.
    pub minimum: f64,
    /// Largest value the device accepts.
    pub maximum: f64,
    /// Difference between successive accepted values.
    pub step_size: f64,
}

impl SwitchHandle {
    /// Create a builder for constructing a [`SwitchHandle`].
    #[must_use]
    pub fn builder() -> SwitchHandleBuilder {
        SwitchHandleBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DewGuardError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - `minimum > maximum` ([`ValidationError::InvertedRange`])
    /// - `step_size <= 0` ([`ValidationError::NonPositiveStep`])
    pub fn validate(&self) -> Result<(), DewGuardError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.minimum > self.maximum {
            return Err(ValidationError::InvertedRange.into());
        }
        if self.step_size <= 0.0 {
            return Err(ValidationError::NonPositiveStep.into());
        }
        Ok(())
    }

    /// Whether `value` falls within the accepted range (inclusive).
    #[must_use]
    pub fn accepts(&self, value: f64) -> bool {
        value >= self.minimum && value <= self.maximum
    }
}

/// Step-by-step builder for [`SwitchHandle`].
#[derive(Debug, Default)]
pub struct SwitchHandleBuilder {
    id: Option<SwitchId>,
    name: Option<String>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    step_size: Option<f64>,
}

impl SwitchHandleBuilder {
    #[must_use]
    pub fn id(mut self, id: SwitchId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    #[must_use]
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    #[must_use]
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = Some(step_size);
        self
    }

    /// Consume the builder, validate, and return a [`SwitchHandle`].
    ///
    /// Range defaults to `[0, 100]` with step `1` — the convention used by
    /// placeholder devices.
    ///
    /// # Errors
    ///
    /// Returns [`DewGuardError::Validation`] if invariants fail.
    pub fn build(self) -> Result<SwitchHandle, DewGuardError> {
        let handle = SwitchHandle {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            minimum: self.minimum.unwrap_or(0.0),
            maximum: self.maximum.unwrap_or(100.0),
            step_size: self.step_size.unwrap_or(1.0),
        };
        handle.validate()?;
        Ok(handle)
    }
}
