//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. The weather and switch sources are synchronous query points: the
//! host refreshes them on its own schedule and the trigger only ever reads
//! the latest snapshot.

pub mod notification;
pub mod switches;
pub mod weather;

pub use notification::NotificationSink;
pub use switches::{SwitchSource, SwitchSourceInfo};
pub use weather::{WeatherInfo, WeatherSource};
