//! Trigger settings — the host-persisted configuration of the trigger.
//!
//! Every write clamps: the desired value is kept in `[0, 100]` and
//! quantized to a multiple of 5, the humidity threshold is an integer in
//! `[0, 100]`. Setters return whether the stored value actually changed so
//! the caller can propagate change notifications explicitly.
//!
//! The serialized field names (`value`, `humidityThreshold`, `switchIndex`)
//! are a contract with the host's sequence files and must not change.

use serde::{Deserialize, Serialize};

/// Serializable trigger configuration with clamped writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PersistedSettings")]
pub struct TriggerSettings {
    #[serde(rename = "switchIndex")]
    switch_index: i32,
    #[serde(rename = "value")]
    desired_value: f64,
    #[serde(rename = "humidityThreshold")]
    humidity_threshold: i32,
}

impl Default for TriggerSettings {
    fn default() -> Self {
        Self {
            switch_index: 0,
            desired_value: 0.0,
            humidity_threshold: 50,
        }
    }
}

impl TriggerSettings {
    /// Index of the configured switch within the current switch list.
    ///
    /// `-1` means "no switch found" after a handle-based reselection; the
    /// plain setter never stores a negative index.
    #[must_use]
    pub fn switch_index(&self) -> i32 {
        self.switch_index
    }

    /// Value to write to the switch when the trigger fires.
    #[must_use]
    pub fn desired_value(&self) -> f64 {
        self.desired_value
    }

    /// Relative-humidity threshold (percent) above which the trigger fires.
    #[must_use]
    pub fn humidity_threshold(&self) -> i32 {
        self.humidity_threshold
    }

    /// Store a new desired value, clamped to `[0, 100]` and rounded to the
    /// nearest multiple of 5. NaN is rejected as a no-op (clamping would
    /// pass it through and break the multiple-of-5 invariant). Returns
    /// whether the stored value changed (epsilon-tolerant comparison).
    pub fn set_desired_value(&mut self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        let quantized = (value.clamp(0.0, 100.0) / 5.0).round() * 5.0;
        if (quantized - self.desired_value).abs() < f64::EPSILON {
            return false;
        }
        self.desired_value = quantized;
        true
    }

    /// Store a new humidity threshold, clamped to `[0, 100]`. Returns
    /// whether the stored value changed.
    pub fn set_humidity_threshold(&mut self, threshold: i32) -> bool {
        let clamped = threshold.clamp(0, 100);
        if clamped == self.humidity_threshold {
            return false;
        }
        self.humidity_threshold = clamped;
        true
    }

    /// Store a new switch index. Negative indices are rejected (no-op);
    /// no upper bound is enforced here — that is the validation routine's
    /// job against the current switch list. Returns whether the stored
    /// value changed.
    pub fn set_switch_index(&mut self, index: i32) -> bool {
        if index <= -1 || index == self.switch_index {
            return false;
        }
        self.switch_index = index;
        true
    }

    /// Overwrite the switch index from a recomputed list position, storing
    /// `-1` when the selected handle was not found in the current list.
    /// Returns whether the stored value changed.
    pub fn sync_switch_index(&mut self, position: Option<usize>) -> bool {
        let index = position.and_then(|p| i32::try_from(p).ok()).unwrap_or(-1);
        if index == self.switch_index {
            return false;
        }
        self.switch_index = index;
        true
    }
}

/// Raw persisted shape; normalized through the clamped setters on load so a
/// hand-edited sequence file cannot smuggle in out-of-range values.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct PersistedSettings {
    #[serde(rename = "switchIndex")]
    switch_index: i32,
    #[serde(rename = "value")]
    value: f64,
    #[serde(rename = "humidityThreshold")]
    humidity_threshold: i32,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            switch_index: 0,
            value: 0.0,
            humidity_threshold: 50,
        }
    }
}

impl From<PersistedSettings> for TriggerSettings {
    fn from(raw: PersistedSettings) -> Self {
        let mut settings = Self::default();
        let _ = settings.set_desired_value(raw.value);
        let _ = settings.set_humidity_threshold(raw.humidity_threshold);
        let _ = settings.set_switch_index(raw.switch_index);
        settings
    }
}
