use slotmap::SlotMap;

use crate::core::{FeatureId, Point, Rect, Size};
use crate::kernel::position::Placement;
use crate::kernel::registry::ItemRegistry;
use crate::kernel::services::ports::{Capabilities, MapHost, MenuSettings};
use crate::kernel::state::{
    CachedSize, Feature, HideHook, MenuState, PanelDisplay, PanelEntry, PanelEntryKind, PanelView,
};

use super::{Action, Effect};

mod controller;
mod feature;
mod items;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    pub fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }

    fn merge(&mut self, other: DispatchResult) {
        self.effects.extend(other.effects);
        self.state_changed |= other.state_changed;
    }
}

/// Owns the menu singleton of one map: panel state, the shared item
/// registry and every feature binding.
pub struct Store {
    state: MenuState,
    registry: ItemRegistry,
    features: SlotMap<FeatureId, Feature>,
    hide_hooks: Vec<HideHook>,
    enabled: bool,
    width: Option<u32>,
    anchor_offset: Point,
    next_session: u64,
    host: Box<dyn MapHost>,
}

impl Store {
    pub fn new(host: Box<dyn MapHost>, settings: MenuSettings) -> Self {
        let mut registry = ItemRegistry::new();
        for spec in settings.items {
            registry.insert(spec, None);
        }

        Self {
            state: MenuState::default(),
            registry,
            features: SlotMap::with_key(),
            hide_hooks: Vec::new(),
            enabled: settings.enabled,
            width: settings.width,
            anchor_offset: settings.anchor.unwrap_or_default(),
            next_session: 0,
            host,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn feature(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(id)
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn host(&self) -> &dyn MapHost {
        self.host.as_ref()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let result = match action {
            Action::ShowAt {
                target,
                related_target,
            } => {
                let mut result = self.close_open_sessions();
                result.merge(self.show(target, related_target));
                result
            }
            Action::Hide => self.hide(),
            Action::SetEnabled(enabled) => {
                let changed = self.enabled != enabled;
                self.enabled = enabled;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: changed,
                }
            }
            Action::Input(event) => self.handle_input(event),
            Action::SelectItem(id) => self.select_item(id),
            Action::HoverItem(id) => self.hover_item(id),
            Action::SetDisabled { item, disabled } => self.set_disabled(item, disabled),
            Action::HideAllItems => self.hide_all_items(),
            Action::ShowAllItems => self.show_all_items(),
            Action::BindFeature { feature, config } => self.bind_feature(feature, config),
            Action::UnbindFeature(feature) => self.unbind_feature(feature),
            Action::AddFeatureItem { feature, spec } => self.add_feature_item(feature, spec),
            Action::ReplaceFeatureItem { feature, spec } => {
                self.replace_feature_item(feature, spec)
            }
            Action::TriggerFeature { feature, point } => self.trigger_feature(feature, point),
        };
        self.refresh_layout();
        result
    }

    /// Snapshot of the panel as the host should render it.
    pub fn panel(&self) -> PanelView<'_> {
        build_panel_view(
            &self.state,
            &self.registry,
            self.width,
            self.host.capabilities(),
        )
    }

    /// On-screen rectangle of the panel while it is shown.
    pub fn panel_rect(&self) -> Option<Rect> {
        if !self.state.visible {
            return None;
        }
        let placement = self.state.placement?;
        let size = self.state.cached_size(self.registry.revision())?;
        Some(placement.rect(size, self.host.viewport_size()))
    }

    /// Panel size for the current registry revision, re-measured off-screen
    /// when the cache is stale.
    fn panel_size(&mut self) -> Size {
        let revision = self.registry.revision();
        if let Some(size) = self.state.cached_size(revision) {
            return size;
        }

        let prev_display = self.state.display;
        self.state.display = PanelDisplay::Offscreen;
        let caps = self.host.capabilities();
        let size = {
            let view = build_panel_view(&self.state, &self.registry, self.width, caps);
            self.host.measure_panel(&view)
        };
        self.state.display = prev_display;

        tracing::trace!(revision, width = size.width, height = size.height, "panel measured");
        self.state.cached_size = Some(CachedSize { revision, size });
        size
    }

    /// Re-places a visible panel whose items changed since it was measured.
    fn refresh_layout(&mut self) {
        if !self.state.visible
            || self
                .state
                .cached_size(self.registry.revision())
                .is_some()
        {
            return;
        }
        let placement = self.place_panel(self.state.anchor);
        self.state.placement = Some(placement);
    }

    fn place_panel(&mut self, anchor: Point) -> Placement {
        let size = self.panel_size();
        let viewport = self.host.viewport_size();
        super::position::place(anchor, size, viewport)
    }
}

fn build_panel_view<'a>(
    state: &MenuState,
    registry: &'a ItemRegistry,
    width: Option<u32>,
    caps: Capabilities,
) -> PanelView<'a> {
    let entries = registry
        .iter()
        .filter(|entry| entry.visible)
        .map(|entry| {
            let kind = match entry.action() {
                Some(item) => PanelEntryKind::Action {
                    label: item.label.as_str(),
                    icon: item.icon_for(caps),
                    enabled: item.enabled,
                    hovered: state.hovered == Some(entry.id),
                },
                None => PanelEntryKind::Separator,
            };
            PanelEntry { id: entry.id, kind }
        })
        .collect();

    PanelView {
        display: state.display,
        placement: state.placement,
        width,
        entries,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
