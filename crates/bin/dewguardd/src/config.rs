//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `dewguard.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial trigger settings.
    pub trigger: TriggerConfig,
    /// Polling loop settings.
    pub poll: PollConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulated environment settings.
    pub simulation: SimulationConfig,
}

/// Initial trigger configuration, applied through the clamped setters.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Value to write to the switch when the trigger fires.
    pub desired_value: f64,
    /// Relative-humidity threshold in percent.
    pub humidity_threshold: i32,
    /// Index of the target switch in the writable-switch list.
    pub switch_index: i32,
}

/// Polling loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between validation passes.
    pub interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Simulated weather/switch environment used by the demo loop.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Humidity the virtual weather station starts at.
    pub initial_humidity: f64,
    /// Number of switches the virtual hub exposes.
    pub switch_count: usize,
}

impl Config {
    /// Load configuration from `dewguard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// semantic check fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("dewguard.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Separated from the
    /// process environment so precedence can be tested deterministically
    /// under parallel test execution.
    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("DEWGUARD_POLL_INTERVAL") {
            if let Ok(secs) = val.parse() {
                self.poll.interval_secs = secs;
            }
        }
        if let Some(val) = lookup("DEWGUARD_HUMIDITY_THRESHOLD") {
            if let Ok(threshold) = val.parse() {
                self.trigger.humidity_threshold = threshold;
            }
        }
        if let Some(val) = lookup("DEWGUARD_DESIRED_VALUE") {
            if let Ok(value) = val.parse() {
                self.trigger.desired_value = value;
            }
        }
        if let Some(val) = lookup("DEWGUARD_SWITCH_INDEX") {
            if let Ok(index) = val.parse() {
                self.trigger.switch_index = index;
            }
        }
        if let Some(val) = lookup("DEWGUARD_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.simulation.switch_count == 0 {
            return Err(ConfigError::Validation(
                "simulation needs at least one switch".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            desired_value: 100.0,
            humidity_threshold: 80,
            switch_index: 0,
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_secs: 30 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "dewguardd=info,dewguard=info".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_humidity: 55.0,
            switch_count: 4,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
