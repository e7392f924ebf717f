//! Simulated weather station, switch hub and notification sink.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dewguard_app::ports::{
    NotificationSink, SwitchSource, SwitchSourceInfo, WeatherInfo, WeatherSource,
};
use dewguard_domain::switch::SwitchHandle;

/// A simulated ambient-weather station with a settable humidity reading.
#[derive(Debug, Clone)]
pub struct VirtualWeatherStation {
    state: Arc<Mutex<WeatherInfo>>,
}

impl Default for VirtualWeatherStation {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(WeatherInfo {
                connected: true,
                humidity: 50.0,
            })),
        }
    }
}

impl VirtualWeatherStation {
    /// Create a connected station reporting `humidity` percent.
    #[must_use]
    pub fn with_humidity(humidity: f64) -> Self {
        Self {
            state: Arc::new(Mutex::new(WeatherInfo {
                connected: true,
                humidity,
            })),
        }
    }

    /// Change the reported humidity.
    pub fn set_humidity(&self, humidity: f64) {
        self.lock_state().humidity = humidity;
    }

    /// Simulate connecting or disconnecting the station.
    pub fn set_connected(&self, connected: bool) {
        self.lock_state().connected = connected;
    }

    fn lock_state(&self) -> MutexGuard<'_, WeatherInfo> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WeatherSource for VirtualWeatherStation {
    fn info(&self) -> WeatherInfo {
        *self.lock_state()
    }
}

/// A simulated switch hub exposing a settable list of writable switches.
#[derive(Debug, Clone, Default)]
pub struct VirtualSwitchHub {
    state: Arc<Mutex<SwitchSourceInfo>>,
}

impl VirtualSwitchHub {
    /// Create a connected hub exposing the given switches.
    #[must_use]
    pub fn with_switches(switches: Vec<SwitchHandle>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SwitchSourceInfo {
                connected: true,
                writable_switches: switches,
            })),
        }
    }

    /// Replace the exposed switch list wholesale.
    pub fn replace_switches(&self, switches: Vec<SwitchHandle>) {
        self.lock_state().writable_switches = switches;
    }

    /// Simulate connecting or disconnecting the hub.
    pub fn set_connected(&self, connected: bool) {
        self.lock_state().connected = connected;
    }

    fn lock_state(&self) -> MutexGuard<'_, SwitchSourceInfo> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SwitchSource for VirtualSwitchHub {
    fn info(&self) -> SwitchSourceInfo {
        self.lock_state().clone()
    }
}

/// Notification sink that logs messages through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn show_success(&self, message: &str) {
        tracing::info!(target: "dewguard::notification", "{message}");
    }
}
