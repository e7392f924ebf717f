//! # dewguard-app
//!
//! Application layer — the trigger component and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `WeatherSource` — connectivity + current relative humidity
//!   - `SwitchSource` — connectivity + the list of writable switches
//!   - `NotificationSink` — fire-and-forget success notifications
//! - Provide the **`HumidityThresholdTrigger`** component the host's
//!   sequencing runtime drives: `validate`, `should_trigger`, `execute`,
//!   `duplicate`
//! - Orchestrate domain objects without knowing *how* device IO works
//!
//! ## Dependency rule
//! Depends on `dewguard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod humidity_trigger;
pub mod ports;
