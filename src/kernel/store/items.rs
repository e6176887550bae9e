use crate::core::ItemId;
use crate::kernel::effect::{Effect, Notification};
use crate::kernel::registry::ItemRef;
use crate::kernel::state::{ItemSpec, MenuEntry};

impl super::Store {
    pub fn insert_item(
        &mut self,
        spec: ItemSpec,
        index: Option<usize>,
    ) -> (ItemId, super::DispatchResult) {
        let inserted = self.insert_entry(spec, index);
        self.refresh_layout();
        inserted
    }

    pub fn remove_item(&mut self, item: ItemRef) -> (Option<MenuEntry>, super::DispatchResult) {
        let removed = self.remove_entry(item);
        self.refresh_layout();
        removed
    }

    pub(super) fn insert_entry(
        &mut self,
        spec: ItemSpec,
        index: Option<usize>,
    ) -> (ItemId, super::DispatchResult) {
        let (id, index) = self.registry.insert(spec, index);
        (
            id,
            super::DispatchResult::changed(vec![Effect::Notify(Notification::ItemAdded {
                id,
                index,
            })]),
        )
    }

    pub(super) fn remove_entry(
        &mut self,
        item: ItemRef,
    ) -> (Option<MenuEntry>, super::DispatchResult) {
        let Some((entry, _)) = self.registry.remove(item) else {
            tracing::debug!(?item, "remove ignored: no such item");
            return (None, super::DispatchResult::unchanged());
        };
        if self.state.hovered == Some(entry.id) {
            self.state.hovered = None;
        }
        let id = entry.id;
        (
            Some(entry),
            super::DispatchResult::changed(vec![Effect::Notify(Notification::ItemRemoved { id })]),
        )
    }

    /// Drains the registry in display order.
    pub fn remove_all_items(&mut self) -> (Vec<MenuEntry>, super::DispatchResult) {
        let removed = self.registry.remove_all();
        if removed.is_empty() {
            return (removed, super::DispatchResult::unchanged());
        }
        self.state.hovered = None;
        self.refresh_layout();
        let effects = removed
            .iter()
            .map(|entry| Effect::Notify(Notification::ItemRemoved { id: entry.id }))
            .collect();
        (removed, super::DispatchResult::changed(effects))
    }

    pub(super) fn set_disabled(&mut self, item: ItemRef, disabled: bool) -> super::DispatchResult {
        let Some(id) = self.registry.set_disabled(item, disabled) else {
            return super::DispatchResult::unchanged();
        };
        let notification = if disabled {
            if self.state.hovered == Some(id) {
                self.state.hovered = None;
            }
            Notification::ItemDisabled { id }
        } else {
            Notification::ItemEnabled { id }
        };
        super::DispatchResult::changed(vec![Effect::Notify(notification)])
    }

    pub(super) fn hide_all_items(&mut self) -> super::DispatchResult {
        let hidden = self.registry.hide_all();
        if hidden.is_empty() {
            return super::DispatchResult::unchanged();
        }
        self.state.hovered = None;
        super::DispatchResult::changed(Vec::new())
    }

    pub(super) fn show_all_items(&mut self) -> super::DispatchResult {
        let shown = self.registry.show_all();
        super::DispatchResult {
            effects: Vec::new(),
            state_changed: !shown.is_empty(),
        }
    }
}
