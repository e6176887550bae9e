use crate::core::{FeatureId, ItemId, LatLng, MapEvent, Point};
use crate::kernel::registry::ItemRef;
use crate::kernel::state::{FeatureMenuConfig, ItemSpec};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShowTarget {
    Point(Point),
    LatLng(LatLng),
}

impl From<Point> for ShowTarget {
    fn from(point: Point) -> Self {
        ShowTarget::Point(point)
    }
}

impl From<LatLng> for ShowTarget {
    fn from(latlng: LatLng) -> Self {
        ShowTarget::LatLng(latlng)
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    ShowAt {
        target: ShowTarget,
        related_target: Option<FeatureId>,
    },
    Hide,
    SetEnabled(bool),
    Input(MapEvent),
    SelectItem(ItemId),
    HoverItem(Option<ItemId>),
    SetDisabled {
        item: ItemRef,
        disabled: bool,
    },
    HideAllItems,
    ShowAllItems,
    BindFeature {
        feature: FeatureId,
        config: FeatureMenuConfig,
    },
    UnbindFeature(FeatureId),
    AddFeatureItem {
        feature: FeatureId,
        spec: ItemSpec,
    },
    ReplaceFeatureItem {
        feature: FeatureId,
        spec: ItemSpec,
    },
    TriggerFeature {
        feature: FeatureId,
        point: Point,
    },
}
