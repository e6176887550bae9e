use super::geom::Point;
use super::id::FeatureId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Enter,
    Tab,
    Char(char),
    Other(u32),
}

/// Input delivered by the host's event system, already translated into
/// container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    /// Right-click / long-press, optionally on a feature.
    ContextMenu {
        point: Point,
        feature: Option<FeatureId>,
    },
    PointerDown {
        point: Point,
        kind: PointerKind,
    },
    KeyDown(KeyCode),
    MoveStart,
    ZoomStart,
    /// The pointer left the map container.
    MouseOut,
}

impl MapEvent {
    pub fn is_dismiss(&self) -> bool {
        matches!(
            self,
            MapEvent::KeyDown(KeyCode::Escape)
                | MapEvent::MoveStart
                | MapEvent::ZoomStart
                | MapEvent::MouseOut
        )
    }

    pub fn as_trigger(&self) -> Option<Trigger> {
        match *self {
            MapEvent::ContextMenu { point, feature } => Some(Trigger { point, feature }),
            _ => None,
        }
    }
}

/// Anything that can open the menu: a screen point plus the feature the
/// gesture landed on, if any.
pub trait TriggerSource {
    fn container_point(&self) -> Point;

    fn feature(&self) -> Option<FeatureId> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub point: Point,
    pub feature: Option<FeatureId>,
}

impl Trigger {
    pub fn at(point: Point) -> Self {
        Self {
            point,
            feature: None,
        }
    }

    pub fn on_feature(point: Point, feature: FeatureId) -> Self {
        Self {
            point,
            feature: Some(feature),
        }
    }
}

impl TriggerSource for Trigger {
    fn container_point(&self) -> Point {
        self.point
    }

    fn feature(&self) -> Option<FeatureId> {
        self.feature
    }
}

impl TriggerSource for Point {
    fn container_point(&self) -> Point {
        *self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
