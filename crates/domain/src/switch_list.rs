//! Switch list — the ordered device list the trigger selects from.
//!
//! The list is supplied and replaced wholesale by the external switch
//! source. Whenever no real source is connected, a synthetic *placeholder*
//! list stands in so the host UI always has a non-empty list to render.
//! The two states are an explicit tagged variant, not a property of the
//! list contents.

use serde::{Deserialize, Serialize};

use crate::id::SwitchId;
use crate::switch::SwitchHandle;

/// Number of synthetic entries in a placeholder list.
pub const PLACEHOLDER_COUNT: usize = 20;

/// Ordered sequence of switch handles, either real or synthetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "switches", rename_all = "snake_case")]
pub enum SwitchList {
    /// Synthetic stand-in entries used while no real source is connected.
    Placeholder(Vec<SwitchHandle>),
    /// The real, externally supplied list of writable switches.
    Live(Vec<SwitchHandle>),
}

impl Default for SwitchList {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl SwitchList {
    /// Generate a fresh placeholder list of [`PLACEHOLDER_COUNT`] synthetic
    /// switches named `Switch 1` … `Switch 20`, each accepting `[0, 100]`
    /// with step `1`.
    #[must_use]
    pub fn placeholder() -> Self {
        let switches = (1..=PLACEHOLDER_COUNT)
            .map(|n| SwitchHandle {
                id: SwitchId::new(),
                name: format!("Switch {n}"),
                minimum: 0.0,
                maximum: 100.0,
                step_size: 1.0,
            })
            .collect();
        Self::Placeholder(switches)
    }

    /// Wrap an externally supplied list of writable switches.
    #[must_use]
    pub fn live(switches: Vec<SwitchHandle>) -> Self {
        Self::Live(switches)
    }

    /// Whether this list is the synthetic placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// The handles in order.
    #[must_use]
    pub fn handles(&self) -> &[SwitchHandle] {
        match self {
            Self::Placeholder(switches) | Self::Live(switches) => switches,
        }
    }

    /// Handle at `index`, if the (non-negative) index is in range.
    #[must_use]
    pub fn get(&self, index: i32) -> Option<&SwitchHandle> {
        let index = usize::try_from(index).ok()?;
        self.handles().get(index)
    }

    /// Position of the handle with `id`, if present.
    #[must_use]
    pub fn position_of(&self, id: SwitchId) -> Option<usize> {
        self.handles().iter().position(|handle| handle.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles().is_empty()
    }
}
