//! Viewport clamp for the menu panel.
//!
//! Each axis is placed independently. When the panel would overflow the far
//! edge it is anchored from that edge instead, otherwise it follows the
//! anchor from the near edge.

use crate::core::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOffset {
    /// Distance from the left (or top) edge.
    Start(i32),
    /// Distance from the right (or bottom) edge.
    End(i32),
}

impl EdgeOffset {
    fn resolve(self, extent: i32, available: i32) -> i32 {
        match self {
            EdgeOffset::Start(offset) => offset,
            EdgeOffset::End(offset) => available.saturating_sub(offset).saturating_sub(extent),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub horizontal: EdgeOffset,
    pub vertical: EdgeOffset,
}

impl Placement {
    /// Panel rectangle in container coordinates.
    pub fn rect(&self, size: Size, viewport: Size) -> Rect {
        Rect::new(
            self.horizontal.resolve(size.width, viewport.width),
            self.vertical.resolve(size.height, viewport.height),
            size.width,
            size.height,
        )
    }
}

pub fn place(anchor: Point, size: Size, viewport: Size) -> Placement {
    Placement {
        horizontal: place_axis(anchor.x, size.width, viewport.width),
        vertical: place_axis(anchor.y, size.height, viewport.height),
    }
}

fn place_axis(p: i32, extent: i32, available: i32) -> EdgeOffset {
    if p.saturating_add(extent) > available {
        // Not `i32::clamp`: the upper bound goes negative when the panel is
        // wider than the viewport, and the upper bound must win then.
        let from_end = available.saturating_sub(p).max(0);
        EdgeOffset::End(from_end.min(available.saturating_sub(extent).saturating_sub(1)))
    } else {
        EdgeOffset::Start(p.max(0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/position.rs"]
mod tests;
