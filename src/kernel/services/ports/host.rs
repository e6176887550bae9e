use crate::core::{LatLng, Point, Size};
use crate::kernel::state::PanelView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub touch: bool,
    pub pointer_events: bool,
    pub high_density: bool,
}

/// What the menu needs from the map it is attached to.
///
/// Coordinate transforms are expected to be pure. `measure_panel` renders
/// the given view out of sight and reports its natural size; it is called
/// synchronously right before the panel is positioned.
pub trait MapHost {
    fn viewport_size(&self) -> Size;

    fn container_to_latlng(&self, point: Point) -> LatLng;

    fn latlng_to_container(&self, latlng: LatLng) -> Point;

    fn container_to_layer(&self, point: Point) -> Point;

    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    fn measure_panel(&mut self, panel: &PanelView<'_>) -> Size;
}
