use rustc_hash::FxHashSet;
use slotmap::SlotMap;

use crate::core::ItemId;
use crate::kernel::state::{EntryKind, ItemSpec, MenuEntry};

/// Addresses an entry either by identity or by display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef {
    Id(ItemId),
    Index(usize),
}

impl From<ItemId> for ItemRef {
    fn from(id: ItemId) -> Self {
        ItemRef::Id(id)
    }
}

impl From<usize> for ItemRef {
    fn from(index: usize) -> Self {
        ItemRef::Index(index)
    }
}

/// Ordered menu entries. `order` is the display order; `entries` owns the
/// data and mints identities.
///
/// Every membership or visibility change bumps `revision`, which is what the
/// size cache is keyed on.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    entries: SlotMap<ItemId, MenuEntry>,
    order: Vec<ItemId>,
    revision: u64,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.order
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    pub fn resolve(&self, item: ItemRef) -> Option<ItemId> {
        match item {
            ItemRef::Id(id) => self.contains(id).then_some(id),
            ItemRef::Index(index) => self.order.get(index).copied(),
        }
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuEntry> + '_ {
        self.order.iter().filter_map(|&id| self.entries.get(id))
    }

    pub fn visible_count(&self) -> usize {
        self.iter().filter(|entry| entry.visible).count()
    }

    /// Inserts at `index` (clamped, default append). Returns the new identity
    /// and the position it landed at.
    pub fn insert(&mut self, spec: ItemSpec, index: Option<usize>) -> (ItemId, usize) {
        let id = self
            .entries
            .insert_with_key(|id| MenuEntry::from_spec(id, spec));
        let at = index.unwrap_or(self.order.len()).min(self.order.len());
        self.order.insert(at, id);
        self.touch();
        (id, at)
    }

    /// Removes the entry and returns it with the position it occupied.
    pub fn remove(&mut self, item: ItemRef) -> Option<(MenuEntry, usize)> {
        let id = self.resolve(item)?;
        let at = self.index_of(id)?;
        self.order.remove(at);
        let entry = self.entries.remove(id)?;
        self.touch();
        Some((entry, at))
    }

    pub fn remove_all(&mut self) -> Vec<MenuEntry> {
        if self.order.is_empty() {
            return Vec::new();
        }
        let order = std::mem::take(&mut self.order);
        let removed = order
            .into_iter()
            .filter_map(|id| self.entries.remove(id))
            .collect();
        self.touch();
        removed
    }

    /// Returns the identity when the enabled state actually flipped.
    /// Separators and unknown entries are ignored.
    pub fn set_disabled(&mut self, item: ItemRef, disabled: bool) -> Option<ItemId> {
        let id = self.resolve(item)?;
        let entry = self.entries.get_mut(id)?;
        let EntryKind::Action(action) = &mut entry.kind else {
            return None;
        };
        if action.enabled != disabled {
            return None;
        }
        action.enabled = !disabled;
        Some(id)
    }

    /// Hides every visible entry; returns the ones that were flipped.
    pub fn hide_all(&mut self) -> Vec<ItemId> {
        self.set_visibility(None, false)
    }

    /// Shows every hidden entry; returns the ones that were flipped.
    pub fn show_all(&mut self) -> Vec<ItemId> {
        self.set_visibility(None, true)
    }

    /// Shows exactly `ids`, skipping any that are gone.
    pub fn show_items(&mut self, ids: &[ItemId]) -> Vec<ItemId> {
        let wanted: FxHashSet<ItemId> = ids.iter().copied().collect();
        self.set_visibility(Some(&wanted), true)
    }

    fn set_visibility(&mut self, only: Option<&FxHashSet<ItemId>>, visible: bool) -> Vec<ItemId> {
        let mut flipped = Vec::new();
        for &id in &self.order {
            if only.is_some_and(|set| !set.contains(&id)) {
                continue;
            }
            if let Some(entry) = self.entries.get_mut(id) {
                if entry.visible != visible {
                    entry.visible = visible;
                    flipped.push(id);
                }
            }
        }
        if !flipped.is_empty() {
            self.touch();
        }
        flipped
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/registry.rs"]
mod tests;
