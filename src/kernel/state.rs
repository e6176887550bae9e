use std::fmt;
use std::rc::Rc;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::core::{FeatureId, ItemId, LatLng, Point, Size};
use crate::kernel::position::Placement;
use crate::kernel::services::ports::Capabilities;

/// Where the menu was last opened, handed to item callbacks and to the
/// `show` notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowLocation {
    pub latlng: LatLng,
    pub layer_point: Point,
    pub container_point: Point,
    pub related_target: Option<FeatureId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemInvocation {
    pub item: ItemId,
    pub location: ShowLocation,
    pub context: Option<serde_json::Value>,
}

#[derive(Clone)]
pub struct ItemCallback(Rc<dyn Fn(&ItemInvocation)>);

impl ItemCallback {
    pub fn new(f: impl Fn(&ItemInvocation) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, invocation: &ItemInvocation) {
        (self.0)(invocation)
    }
}

impl fmt::Debug for ItemCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ItemCallback(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconRef {
    Url(CompactString),
    Class(CompactString),
}

impl IconRef {
    fn pick(url: Option<&CompactString>, class: Option<&CompactString>) -> Option<Self> {
        url.map(|u| IconRef::Url(u.clone()))
            .or_else(|| class.map(|c| IconRef::Class(c.clone())))
    }
}

/// Declarative description of an entry, as written by application code or
/// loaded from settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    #[serde(default)]
    pub text: CompactString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retina_icon: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retina_icon_class: Option<CompactString>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub separator: bool,
    #[serde(default = "default_hide_on_select")]
    pub hide_on_select: bool,
    /// Position used when the spec is injected by a feature session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    #[serde(skip)]
    pub callback: Option<ItemCallback>,
}

fn default_hide_on_select() -> bool {
    true
}

impl Default for ItemSpec {
    fn default() -> Self {
        Self {
            text: CompactString::default(),
            icon: None,
            retina_icon: None,
            icon_class: None,
            retina_icon_class: None,
            disabled: false,
            separator: false,
            hide_on_select: true,
            index: None,
            context: None,
            callback: None,
        }
    }
}

impl ItemSpec {
    pub fn action(text: impl Into<CompactString>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn separator() -> Self {
        Self {
            separator: true,
            ..Self::default()
        }
    }

    /// The callback runs while the menu is borrowed; see
    /// `ContextMenu::dispatch_deferred` for re-entering the menu from it.
    pub fn with_callback(mut self, f: impl Fn(&ItemInvocation) + 'static) -> Self {
        self.callback = Some(ItemCallback::new(f));
        self
    }

    pub fn with_icon(mut self, url: impl Into<CompactString>) -> Self {
        self.icon = Some(url.into());
        self
    }

    pub fn with_retina_icon(mut self, url: impl Into<CompactString>) -> Self {
        self.retina_icon = Some(url.into());
        self
    }

    pub fn with_icon_class(mut self, class: impl Into<CompactString>) -> Self {
        self.icon_class = Some(class.into());
        self
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn keep_open(mut self) -> Self {
        self.hide_on_select = false;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ActionItem {
    pub label: CompactString,
    pub icon: Option<IconRef>,
    pub retina_icon: Option<IconRef>,
    pub enabled: bool,
    pub callback: Option<ItemCallback>,
    pub context: Option<serde_json::Value>,
    pub dismiss_on_select: bool,
}

impl ActionItem {
    pub fn icon_for(&self, caps: Capabilities) -> Option<&IconRef> {
        if caps.high_density {
            if let Some(icon) = self.retina_icon.as_ref() {
                return Some(icon);
            }
        }
        self.icon.as_ref()
    }
}

#[derive(Debug, Clone)]
pub enum EntryKind {
    Action(ActionItem),
    Separator,
}

#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub id: ItemId,
    pub visible: bool,
    pub kind: EntryKind,
}

impl MenuEntry {
    pub(crate) fn from_spec(id: ItemId, spec: ItemSpec) -> Self {
        if spec.separator {
            return Self {
                id,
                visible: true,
                kind: EntryKind::Separator,
            };
        }

        let icon = IconRef::pick(spec.icon.as_ref(), spec.icon_class.as_ref());
        let retina_icon = IconRef::pick(spec.retina_icon.as_ref(), spec.retina_icon_class.as_ref());
        Self {
            id,
            visible: true,
            kind: EntryKind::Action(ActionItem {
                label: spec.text,
                icon,
                retina_icon,
                enabled: !spec.disabled,
                callback: spec.callback,
                context: spec.context,
                dismiss_on_select: spec.hide_on_select,
            }),
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self.kind, EntryKind::Separator)
    }

    pub fn action(&self) -> Option<&ActionItem> {
        match &self.kind {
            EntryKind::Action(item) => Some(item),
            EntryKind::Separator => None,
        }
    }

    pub fn label(&self) -> &str {
        match &self.kind {
            EntryKind::Action(item) => item.label.as_str(),
            EntryKind::Separator => "",
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.action().is_some_and(|item| item.enabled)
    }

    pub fn is_selectable(&self) -> bool {
        self.visible && self.is_enabled()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelDisplay {
    #[default]
    Hidden,
    /// Rendered out of view for measurement only.
    Offscreen,
    Shown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CachedSize {
    pub revision: u64,
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuState {
    pub visible: bool,
    /// Resolved anchor, offset already applied.
    pub anchor: Point,
    pub location: Option<ShowLocation>,
    pub placement: Option<Placement>,
    pub display: PanelDisplay,
    pub hovered: Option<ItemId>,
    pub(crate) cached_size: Option<CachedSize>,
}

impl MenuState {
    pub fn last_latlng(&self) -> Option<LatLng> {
        self.location.map(|loc| loc.latlng)
    }

    pub fn cached_size(&self, revision: u64) -> Option<Size> {
        self.cached_size
            .filter(|cached| cached.revision == revision)
            .map(|cached| cached.size)
    }
}

/// Per-feature menu configuration. Every feature owns its own copy.
#[derive(Debug, Clone)]
pub struct FeatureMenuConfig {
    pub items: Vec<ItemSpec>,
    /// Keep global items visible alongside the feature's own.
    pub inherit: bool,
}

impl Default for FeatureMenuConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            inherit: true,
        }
    }
}

impl FeatureMenuConfig {
    pub fn new(items: Vec<ItemSpec>) -> Self {
        Self {
            items,
            inherit: true,
        }
    }

    pub fn replacing_global(mut self) -> Self {
        self.inherit = false;
        self
    }
}

/// One trigger-to-close cycle of a feature menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSession {
    pub token: u64,
    pub injected: Vec<ItemId>,
    /// Global entries this session hid; restored on close.
    pub hidden: Vec<ItemId>,
}

#[derive(Debug, Clone, Default)]
pub struct FeatureMenuBinding {
    pub config: FeatureMenuConfig,
    pub session: Option<FeatureSession>,
}

impl FeatureMenuBinding {
    pub fn new(config: FeatureMenuConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn injected_identities(&self) -> &[ItemId] {
        self.session
            .as_ref()
            .map(|s| s.injected.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }
}

/// A map feature as seen by the menu: it has-a binding, or none.
#[derive(Debug, Clone, Default)]
pub struct Feature {
    pub binding: Option<FeatureMenuBinding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HideHook {
    CloseFeatureSession { feature: FeatureId, token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEntryKind<'a> {
    Action {
        label: &'a str,
        icon: Option<&'a IconRef>,
        enabled: bool,
        hovered: bool,
    },
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry<'a> {
    pub id: ItemId,
    pub kind: PanelEntryKind<'a>,
}

/// Read-only view of the panel handed to the host for measuring and
/// rendering. Hidden entries are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView<'a> {
    pub display: PanelDisplay,
    pub placement: Option<Placement>,
    pub width: Option<u32>,
    pub entries: Vec<PanelEntry<'a>>,
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
