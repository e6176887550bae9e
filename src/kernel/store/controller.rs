use crate::core::{FeatureId, ItemId, MapEvent, PointerKind, Trigger};
use crate::kernel::action::ShowTarget;
use crate::kernel::effect::{Effect, Notification};
use crate::kernel::state::{HideHook, ItemInvocation, PanelDisplay, ShowLocation};

impl super::Store {
    /// `Hidden -> Visible`, or a reposition when already visible.
    pub(super) fn show(
        &mut self,
        target: ShowTarget,
        related_target: Option<FeatureId>,
    ) -> super::DispatchResult {
        if self.registry.is_empty() {
            tracing::debug!("show ignored: menu has no items");
            return super::DispatchResult::unchanged();
        }

        let (container_point, latlng) = match target {
            ShowTarget::Point(point) => (point, self.host.container_to_latlng(point)),
            ShowTarget::LatLng(latlng) => (self.host.latlng_to_container(latlng), latlng),
        };
        let location = ShowLocation {
            latlng,
            layer_point: self.host.container_to_layer(container_point),
            container_point,
            related_target,
        };

        // Registry mutations made for this trigger are already applied, so a
        // stale size gets re-measured here before anything is placed.
        let anchor = container_point.offset(self.anchor_offset);
        let placement = self.place_panel(anchor);

        let was_visible = self.state.visible;
        self.state.visible = true;
        self.state.display = PanelDisplay::Shown;
        self.state.anchor = anchor;
        self.state.location = Some(location);
        self.state.placement = Some(placement);

        if was_visible {
            tracing::debug!(x = anchor.x, y = anchor.y, "menu repositioned");
            return super::DispatchResult::changed(Vec::new());
        }

        tracing::debug!(x = anchor.x, y = anchor.y, "menu shown");
        super::DispatchResult::changed(vec![Effect::Notify(Notification::Shown { location })])
    }

    /// `Visible -> Hidden`. Runs the one-shot hide hooks after the `hide`
    /// notification.
    pub(super) fn hide(&mut self) -> super::DispatchResult {
        if !self.state.visible {
            return super::DispatchResult::unchanged();
        }

        self.state.visible = false;
        self.state.display = PanelDisplay::Hidden;
        self.state.placement = None;
        self.state.hovered = None;
        tracing::debug!("menu hidden");

        let mut result = super::DispatchResult::changed(vec![Effect::Notify(Notification::Hidden)]);
        for hook in std::mem::take(&mut self.hide_hooks) {
            match hook {
                HideHook::CloseFeatureSession { feature, token } => {
                    result.merge(self.close_session(feature, token));
                }
            }
        }
        result
    }

    pub(super) fn handle_input(&mut self, event: MapEvent) -> super::DispatchResult {
        if event.is_dismiss() {
            return self.hide();
        }
        if let Some(Trigger { point, feature }) = event.as_trigger() {
            if let Some(feature) = feature.filter(|&f| self.is_bound(f)) {
                return self.trigger_feature(feature, point);
            }
            if !self.enabled {
                tracing::debug!("context menu gesture ignored: handler disabled");
                return super::DispatchResult::unchanged();
            }
            let mut result = self.close_open_sessions();
            result.merge(self.show(ShowTarget::Point(point), None));
            return result;
        }

        match event {
            MapEvent::PointerDown { point, kind } => {
                if !self.state.visible || !self.accepts_pointer(kind) {
                    return super::DispatchResult::unchanged();
                }
                if self.panel_rect().is_some_and(|rect| rect.contains(point)) {
                    return super::DispatchResult::unchanged();
                }
                self.hide()
            }
            _ => super::DispatchResult::unchanged(),
        }
    }

    pub(super) fn select_item(&mut self, id: ItemId) -> super::DispatchResult {
        if !self.state.visible {
            return super::DispatchResult::unchanged();
        }
        let Some(location) = self.state.location else {
            return super::DispatchResult::unchanged();
        };
        let Some(item) = self
            .registry
            .get(id)
            .filter(|entry| entry.is_selectable())
            .and_then(|entry| entry.action())
        else {
            tracing::debug!(?id, "select ignored: item missing, hidden or disabled");
            return super::DispatchResult::unchanged();
        };

        let callback = item.callback.clone();
        let context = item.context.clone();
        let dismiss = item.dismiss_on_select;

        let mut result = if dismiss {
            self.hide()
        } else {
            super::DispatchResult::unchanged()
        };
        if let Some(callback) = callback {
            result.effects.push(Effect::InvokeItem {
                callback,
                invocation: ItemInvocation {
                    item: id,
                    location,
                    context,
                },
            });
        }
        result
            .effects
            .push(Effect::Notify(Notification::Selected { id }));
        result
    }

    pub(super) fn hover_item(&mut self, id: Option<ItemId>) -> super::DispatchResult {
        let next = match id {
            Some(id) => {
                let selectable = self
                    .registry
                    .get(id)
                    .is_some_and(|entry| entry.is_selectable());
                if !self.state.visible || !selectable {
                    return super::DispatchResult::unchanged();
                }
                Some(id)
            }
            None => None,
        };

        if self.state.hovered == next {
            return super::DispatchResult::unchanged();
        }
        self.state.hovered = next;
        super::DispatchResult {
            effects: Vec::new(),
            state_changed: true,
        }
    }

    fn accepts_pointer(&self, kind: PointerKind) -> bool {
        match kind {
            PointerKind::Mouse => true,
            PointerKind::Touch | PointerKind::Pen => {
                let caps = self.host.capabilities();
                caps.touch || caps.pointer_events
            }
        }
    }
}
