//! Validation issues — soft, human-readable failure reports.
//!
//! Anomalies (disconnected sources, bad sensor data, misconfigured
//! switches) never raise errors; they become issues the host renders to
//! explain why a sequence is blocked. The full list is recomputed on every
//! validation pass and diffed against the previous snapshot so the host is
//! only notified on actual change.

use serde::{Deserialize, Serialize};

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Issue {
    /// The weather source is not connected.
    WeatherNotConnected,
    /// The weather source reported a humidity outside `(0, 100]`.
    NoHumidityData,
    /// The switch source is not connected.
    SwitchNotConnected,
    /// The switch source is connected but exposes no writable switches.
    NoWritableSwitch,
    /// No switch is selected (configured index out of range).
    NoSwitchSelected,
    /// The desired value falls outside the selected switch's range.
    InvalidSwitchValue {
        minimum: f64,
        maximum: f64,
        step_size: f64,
    },
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeatherNotConnected => f.write_str("Weather Not Connected"),
            Self::NoHumidityData => f.write_str("No Humidity Data"),
            Self::SwitchNotConnected => f.write_str("Switch Not Connected"),
            Self::NoWritableSwitch => f.write_str("No Writable Switch"),
            Self::NoSwitchSelected => f.write_str("No Switch Selected"),
            Self::InvalidSwitchValue {
                minimum,
                maximum,
                step_size,
            } => write!(
                f,
                "Invalid Switch Value - valid range is {minimum} to {maximum} \
                 with a step size of {step_size}"
            ),
        }
    }
}

/// Ordered snapshot of the issues from the last validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueLog {
    issues: Vec<Issue>,
}

impl IssueLog {
    /// The issues from the last validation pass, in report order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Render the issues as display strings, in report order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Replace the snapshot with a freshly computed list. Returns `true`
    /// when the new list differs element-wise (order-sensitive) from the
    /// previous one, i.e. when the host should be re-notified.
    pub fn replace(&mut self, issues: Vec<Issue>) -> bool {
        if self.issues == issues {
            return false;
        }
        self.issues = issues;
        true
    }
}
