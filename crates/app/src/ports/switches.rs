//! Switch port — connectivity and the list of writable switch devices.

use std::sync::Arc;

use dewguard_domain::switch::SwitchHandle;

/// Snapshot of the switch source at query time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchSourceInfo {
    /// Whether a real switch hub is connected.
    pub connected: bool,
    /// Writable switches exposed by the hub, in device order.
    pub writable_switches: Vec<SwitchHandle>,
}

impl SwitchSourceInfo {
    /// A disconnected source with no devices.
    #[must_use]
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            writable_switches: Vec::new(),
        }
    }
}

/// Supplies the latest switch-hub snapshot.
pub trait SwitchSource: Send + Sync {
    /// Current connectivity and writable switch list.
    fn info(&self) -> SwitchSourceInfo;
}

impl<T: SwitchSource> SwitchSource for Arc<T> {
    fn info(&self) -> SwitchSourceInfo {
        (**self).info()
    }
}
