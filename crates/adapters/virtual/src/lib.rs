//! # dewguard-adapter-virtual
//!
//! Virtual/demo adapter that provides simulated sources for testing and
//! demonstration purposes.
//!
//! ## Provided sources
//!
//! | Source | Port | Behaviour |
//! |--------|------|-----------|
//! | [`VirtualWeatherStation`] | `WeatherSource` | Settable humidity and connectivity |
//! | [`VirtualSwitchHub`] | `SwitchSource` | Settable switch list and connectivity |
//! | [`TracingNotifier`] | `NotificationSink` | Logs notifications at info level |
//!
//! Both simulated devices are cheaply cloneable; clones share state, so a
//! trigger and its duplicates observe the same simulated world.
//!
//! ## Dependency rule
//!
//! Depends on `dewguard-app` (port traits) and `dewguard-domain` only.

mod sources;

pub use sources::{TracingNotifier, VirtualSwitchHub, VirtualWeatherStation};
