use unicode_width::UnicodeWidthStr;

use crate::core::Size;
use crate::kernel::state::{PanelEntryKind, PanelView};

/// Fixed-cell text metrics for hosts without a layout engine of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub cell_width: i32,
    pub row_height: i32,
    pub separator_height: i32,
    pub icon_width: i32,
    pub padding: i32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            cell_width: 7,
            row_height: 24,
            separator_height: 9,
            icon_width: 24,
            padding: 4,
        }
    }
}

impl TextMetrics {
    /// Natural panel size: widest label plus icon column, stacked rows. A
    /// configured panel width wins over the label width.
    pub fn estimate(&self, panel: &PanelView<'_>) -> Size {
        let mut max_label = 0usize;
        let mut has_icon = false;
        let mut height = 0i32;
        for entry in &panel.entries {
            match entry.kind {
                PanelEntryKind::Action { label, icon, .. } => {
                    max_label = max_label.max(label.width());
                    has_icon |= icon.is_some();
                    height = height.saturating_add(self.row_height);
                }
                PanelEntryKind::Separator => {
                    height = height.saturating_add(self.separator_height);
                }
            }
        }

        let label_w = i32::try_from(max_label)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.cell_width);
        let icon_w = if has_icon { self.icon_width } else { 0 };
        let inner = match panel.width {
            Some(width) => i32::try_from(width).unwrap_or(i32::MAX),
            None => label_w.saturating_add(icon_w),
        };
        let pad = self.padding.saturating_mul(2);
        Size::new(inner.saturating_add(pad), height.saturating_add(pad))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/measure.rs"]
mod tests;
