//! Weather port — connectivity and the current ambient humidity.

use std::sync::Arc;

/// Snapshot of the weather source at query time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherInfo {
    /// Whether a real weather device is connected.
    pub connected: bool,
    /// Relative humidity in percent. Only meaningful within `(0, 100]`;
    /// anything else is treated as "no humidity data".
    pub humidity: f64,
}

impl WeatherInfo {
    /// A disconnected source with no reading.
    #[must_use]
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            humidity: 0.0,
        }
    }
}

/// Supplies the latest weather snapshot.
pub trait WeatherSource: Send + Sync {
    /// Current connectivity and humidity reading.
    fn info(&self) -> WeatherInfo;
}

impl<T: WeatherSource> WeatherSource for Arc<T> {
    fn info(&self) -> WeatherInfo {
        (**self).info()
    }
}
