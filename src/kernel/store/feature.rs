use crate::core::{FeatureId, Point};
use crate::kernel::action::ShowTarget;
use crate::kernel::registry::ItemRef;
use crate::kernel::state::{
    Feature, FeatureMenuBinding, FeatureMenuConfig, FeatureSession, HideHook, ItemSpec,
};

impl super::Store {
    pub fn add_feature(&mut self) -> FeatureId {
        self.features.insert(Feature::default())
    }

    /// Drops the feature and its binding, closing an open session first.
    pub fn remove_feature(&mut self, feature: FeatureId) -> super::DispatchResult {
        let mut result = self.close_feature(feature);
        if self.features.remove(feature).is_some() {
            result.state_changed = true;
        }
        if let Some(location) = self.state.location.as_mut() {
            if location.related_target == Some(feature) {
                location.related_target = None;
            }
        }
        self.refresh_layout();
        result
    }

    /// Number of configured items removed.
    pub fn remove_feature_items_at_index(&mut self, feature: FeatureId, index: usize) -> usize {
        match self.binding_mut(feature) {
            Some(binding) => remove_items_with_index(&mut binding.config.items, Some(index)),
            None => {
                tracing::debug!(?feature, "remove items ignored: feature not bound");
                0
            }
        }
    }

    pub(super) fn is_bound(&self, feature: FeatureId) -> bool {
        self.features
            .get(feature)
            .is_some_and(|f| f.binding.is_some())
    }

    pub(super) fn bind_feature(
        &mut self,
        feature: FeatureId,
        config: FeatureMenuConfig,
    ) -> super::DispatchResult {
        if !self.features.contains_key(feature) {
            tracing::debug!(?feature, "bind ignored: unknown feature");
            return super::DispatchResult::unchanged();
        }

        let mut result = self.close_feature(feature);
        if let Some(f) = self.features.get_mut(feature) {
            f.binding = Some(FeatureMenuBinding::new(config));
        }
        result.state_changed = true;
        result
    }

    pub(super) fn unbind_feature(&mut self, feature: FeatureId) -> super::DispatchResult {
        let mut result = self.close_feature(feature);
        if let Some(f) = self.features.get_mut(feature) {
            result.state_changed |= f.binding.take().is_some();
        }
        result
    }

    pub(super) fn add_feature_item(
        &mut self,
        feature: FeatureId,
        spec: ItemSpec,
    ) -> super::DispatchResult {
        let Some(binding) = self.binding_mut(feature) else {
            tracing::debug!(?feature, "add item ignored: feature not bound");
            return super::DispatchResult::unchanged();
        };
        binding.config.items.push(spec);
        super::DispatchResult::changed(Vec::new())
    }

    /// Drops configured items declaring the same index as `spec`, then
    /// appends `spec`.
    pub(super) fn replace_feature_item(
        &mut self,
        feature: FeatureId,
        spec: ItemSpec,
    ) -> super::DispatchResult {
        let Some(binding) = self.binding_mut(feature) else {
            tracing::debug!(?feature, "replace item ignored: feature not bound");
            return super::DispatchResult::unchanged();
        };
        remove_items_with_index(&mut binding.config.items, spec.index);
        binding.config.items.push(spec);
        super::DispatchResult::changed(Vec::new())
    }

    /// Opens a session for `feature`: optional hide of the inherited items,
    /// injection of the configured ones, then show at `point`.
    pub(super) fn trigger_feature(
        &mut self,
        feature: FeatureId,
        point: Point,
    ) -> super::DispatchResult {
        let Some(config) = self
            .features
            .get(feature)
            .and_then(|f| f.binding.as_ref())
            .map(|binding| binding.config.clone())
        else {
            tracing::debug!(?feature, "trigger ignored: feature not bound");
            return super::DispatchResult::unchanged();
        };

        // Reconcile any earlier injection before starting a new one.
        let mut result = self.close_open_sessions();

        let hidden = if config.inherit {
            Vec::new()
        } else {
            self.registry.hide_all()
        };
        if !hidden.is_empty() {
            self.state.hovered = None;
            result.state_changed = true;
        }

        let mut injected = Vec::with_capacity(config.items.len());
        for spec in config.items {
            let index = spec.index;
            let (id, inserted) = self.insert_entry(spec, index);
            injected.push(id);
            result.merge(inserted);
        }

        self.next_session = self.next_session.wrapping_add(1);
        let token = self.next_session;
        if let Some(binding) = self.binding_mut(feature) {
            binding.session = Some(FeatureSession {
                token,
                injected,
                hidden,
            });
        }
        self.hide_hooks
            .push(HideHook::CloseFeatureSession { feature, token });
        tracing::debug!(?feature, token, "feature session opened");

        result.merge(self.show(ShowTarget::Point(point), Some(feature)));
        if !self.state.visible {
            result.merge(self.close_session(feature, token));
        }
        result
    }

    /// Reverses a session's injection and visibility changes. Does nothing
    /// unless `token` names the feature's currently open session.
    pub(super) fn close_session(&mut self, feature: FeatureId, token: u64) -> super::DispatchResult {
        let hook = HideHook::CloseFeatureSession { feature, token };
        self.hide_hooks.retain(|h| *h != hook);

        let Some(binding) = self.binding_mut(feature) else {
            return super::DispatchResult::unchanged();
        };
        if binding.session.as_ref().map(|s| s.token) != Some(token) {
            return super::DispatchResult::unchanged();
        }
        let Some(session) = binding.session.take() else {
            return super::DispatchResult::unchanged();
        };

        let mut result = super::DispatchResult::changed(Vec::new());
        for id in session.injected {
            let (_, removed) = self.remove_entry(ItemRef::Id(id));
            result.merge(removed);
        }
        if !session.hidden.is_empty() {
            self.registry.show_items(&session.hidden);
        }
        tracing::debug!(?feature, token, "feature session closed");
        result
    }

    /// Closes every open session without a `hide` transition.
    pub(super) fn close_open_sessions(&mut self) -> super::DispatchResult {
        let open: Vec<(FeatureId, u64)> = self
            .features
            .iter()
            .filter_map(|(id, f)| {
                let session = f.binding.as_ref()?.session.as_ref()?;
                Some((id, session.token))
            })
            .collect();

        let mut result = super::DispatchResult::unchanged();
        for (feature, token) in open {
            tracing::debug!(?feature, token, "flushing open feature session");
            result.merge(self.close_session(feature, token));
        }
        result
    }

    fn close_feature(&mut self, feature: FeatureId) -> super::DispatchResult {
        let token = self
            .features
            .get(feature)
            .and_then(|f| f.binding.as_ref())
            .and_then(|binding| binding.session.as_ref())
            .map(|session| session.token);
        match token {
            Some(token) => self.close_session(feature, token),
            None => super::DispatchResult::unchanged(),
        }
    }

    fn binding_mut(&mut self, feature: FeatureId) -> Option<&mut FeatureMenuBinding> {
        self.features.get_mut(feature)?.binding.as_mut()
    }
}

fn remove_items_with_index(items: &mut Vec<ItemSpec>, index: Option<usize>) -> usize {
    let before = items.len();
    items.retain(|spec| spec.index != index);
    before - items.len()
}
