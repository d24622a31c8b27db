//! Persisted settings value object

use serde::{Deserialize, Serialize};

/// State carried between invocations: the chosen device and the current
/// scope inside the signal store.
///
/// `device` absent means "discover on next run". Field order is the
/// serialization order, so written files diff cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Network name of the device, as reported by discovery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Scope segments relative to the signal store root
    #[serde(default)]
    pub scope: Vec<String>,
}

impl Settings {
    /// Settings for a first run: no device chosen, scope at the root.
    pub fn empty() -> Self {
        Self::default()
    }
}
