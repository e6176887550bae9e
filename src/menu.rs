//! Public surface of the context menu.
//!
//! `ContextMenu` wraps the [`Store`] and runs its effects in order:
//! notifications go to the injected [`Notifier`], item callbacks are called
//! in place. Mutating methods return whether the panel needs a redraw.
//!
//! Effects run while the menu is mutably borrowed. A host that shares the
//! menu (`Rc<RefCell<ContextMenu>>`) and re-enters it from a callback must use
//! [`ContextMenu::dispatch_deferred`] and run the effects after releasing
//! its borrow.

use crate::core::{FeatureId, ItemId, MapEvent, TriggerSource};
use crate::kernel::services::ports::{MapHost, MenuSettings, Notifier};
use crate::kernel::{
    Action, DispatchResult, FeatureMenuConfig, ItemRef, ItemSpec, MenuEntry, PanelView,
    ShowTarget, Store,
};

pub struct ContextMenu {
    store: Store,
    notifier: Box<dyn Notifier>,
}

impl ContextMenu {
    pub fn new(
        host: impl MapHost + 'static,
        notifier: impl Notifier + 'static,
        settings: MenuSettings,
    ) -> Self {
        Self {
            store: Store::new(Box::new(host), settings),
            notifier: Box::new(notifier),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn panel(&self) -> PanelView<'_> {
        self.store.panel()
    }

    pub fn is_visible(&self) -> bool {
        self.store.is_visible()
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_enabled()
    }

    pub fn enable(&mut self) -> bool {
        self.dispatch(Action::SetEnabled(true))
    }

    pub fn disable(&mut self) -> bool {
        self.dispatch(Action::SetEnabled(false))
    }

    pub fn show_at(
        &mut self,
        target: impl Into<ShowTarget>,
        related_target: Option<FeatureId>,
    ) -> bool {
        self.dispatch(Action::ShowAt {
            target: target.into(),
            related_target,
        })
    }

    pub fn hide(&mut self) -> bool {
        self.dispatch(Action::Hide)
    }

    pub fn handle_event(&mut self, event: MapEvent) -> bool {
        self.dispatch(Action::Input(event))
    }

    pub fn trigger(&mut self, source: &dyn TriggerSource) -> bool {
        self.handle_event(MapEvent::ContextMenu {
            point: source.container_point(),
            feature: source.feature(),
        })
    }

    pub fn select_item(&mut self, id: ItemId) -> bool {
        self.dispatch(Action::SelectItem(id))
    }

    pub fn hover_item(&mut self, id: Option<ItemId>) -> bool {
        self.dispatch(Action::HoverItem(id))
    }

    pub fn add_item(&mut self, spec: ItemSpec) -> ItemId {
        self.insert_item(spec, None)
    }

    pub fn insert_item(&mut self, spec: ItemSpec, index: Option<usize>) -> ItemId {
        let (id, result) = self.store.insert_item(spec, index);
        self.run(result);
        id
    }

    pub fn remove_item(&mut self, item: impl Into<ItemRef>) -> Option<MenuEntry> {
        let (removed, result) = self.store.remove_item(item.into());
        self.run(result);
        removed
    }

    pub fn remove_all_items(&mut self) -> Vec<MenuEntry> {
        let (removed, result) = self.store.remove_all_items();
        self.run(result);
        removed
    }

    pub fn hide_all_items(&mut self) -> bool {
        self.dispatch(Action::HideAllItems)
    }

    pub fn show_all_items(&mut self) -> bool {
        self.dispatch(Action::ShowAllItems)
    }

    pub fn set_disabled(&mut self, item: impl Into<ItemRef>, disabled: bool) -> bool {
        self.dispatch(Action::SetDisabled {
            item: item.into(),
            disabled,
        })
    }

    pub fn add_feature(&mut self) -> FeatureId {
        self.store.add_feature()
    }

    pub fn remove_feature(&mut self, feature: FeatureId) -> bool {
        let result = self.store.remove_feature(feature);
        self.run(result)
    }

    pub fn bind_context_menu(&mut self, feature: FeatureId, config: FeatureMenuConfig) -> bool {
        self.dispatch(Action::BindFeature { feature, config })
    }

    pub fn unbind_context_menu(&mut self, feature: FeatureId) -> bool {
        self.dispatch(Action::UnbindFeature(feature))
    }

    pub fn add_context_menu_item(&mut self, feature: FeatureId, spec: ItemSpec) -> bool {
        self.dispatch(Action::AddFeatureItem { feature, spec })
    }

    pub fn remove_context_menu_items_at_index(&mut self, feature: FeatureId, index: usize) -> usize {
        self.store.remove_feature_items_at_index(feature, index)
    }

    pub fn replace_context_menu_item(&mut self, feature: FeatureId, spec: ItemSpec) -> bool {
        self.dispatch(Action::ReplaceFeatureItem { feature, spec })
    }

    /// Applies `action` without running its effects. The caller runs them,
    /// in order, with [`crate::kernel::Effect::run`].
    pub fn dispatch_deferred(&mut self, action: Action) -> DispatchResult {
        self.store.dispatch(action)
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        self.run(result)
    }

    fn run(&mut self, result: DispatchResult) -> bool {
        for effect in result.effects {
            effect.run(self.notifier.as_mut());
        }
        result.state_changed
    }
}
