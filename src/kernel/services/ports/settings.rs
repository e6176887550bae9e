use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::kernel::state::ItemSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSettings {
    /// Open on map context-menu gestures.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Offset added to every anchor point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Point>,
    /// Global items, added in order when the menu is created.
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

fn default_enabled() -> bool {
    true
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            width: None,
            anchor: None,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
