use super::*;
use slotmap::SlotMap;

fn item_id() -> ItemId {
    let mut ids: SlotMap<ItemId, ()> = SlotMap::with_key();
    ids.insert(())
}

#[test]
fn spec_defaults_dismiss_on_select() {
    let spec = ItemSpec::action("Zoom in");
    assert!(spec.hide_on_select);
    assert!(!spec.separator);
    assert!(!ItemSpec::action("x").keep_open().hide_on_select);
}

#[test]
fn spec_deserializes_with_defaults() {
    let spec: ItemSpec = serde_json::from_str(
        r#"{"text": "Center map", "icon_class": "icon-center", "index": 2, "context": {"zoom": 3}}"#,
    )
    .unwrap();
    assert_eq!(spec.text, "Center map");
    assert!(spec.hide_on_select);
    assert!(!spec.disabled);
    assert_eq!(spec.index, Some(2));
    assert_eq!(spec.context, Some(serde_json::json!({"zoom": 3})));
    assert!(spec.callback.is_none());
}

#[test]
fn separator_spec_builds_separator_entry() {
    let entry = MenuEntry::from_spec(item_id(), ItemSpec::separator());
    assert!(entry.is_separator());
    assert!(entry.visible);
    assert!(!entry.is_selectable());
    assert_eq!(entry.label(), "");
}

#[test]
fn disabled_spec_is_not_selectable() {
    let entry = MenuEntry::from_spec(item_id(), ItemSpec::action("Delete").disabled());
    assert!(!entry.is_enabled());
    assert!(!entry.is_selectable());
}

#[test]
fn icon_url_wins_over_class() {
    let spec = ItemSpec::action("Pin")
        .with_icon("pin.png")
        .with_icon_class("icon-pin");
    let entry = MenuEntry::from_spec(item_id(), spec);
    let item = entry.action().unwrap();
    assert_eq!(item.icon, Some(IconRef::Url("pin.png".into())));
}

#[test]
fn retina_icon_used_on_high_density_only() {
    let spec = ItemSpec::action("Pin")
        .with_icon("pin.png")
        .with_retina_icon("pin@2x.png");
    let entry = MenuEntry::from_spec(item_id(), spec);
    let item = entry.action().unwrap();

    let normal = Capabilities::default();
    let retina = Capabilities {
        high_density: true,
        ..Capabilities::default()
    };
    assert_eq!(item.icon_for(normal), Some(&IconRef::Url("pin.png".into())));
    assert_eq!(item.icon_for(retina), Some(&IconRef::Url("pin@2x.png".into())));
}

#[test]
fn retina_falls_back_to_normal_icon() {
    let entry = MenuEntry::from_spec(item_id(), ItemSpec::action("Pin").with_icon_class("pin"));
    let retina = Capabilities {
        high_density: true,
        ..Capabilities::default()
    };
    assert_eq!(
        entry.action().unwrap().icon_for(retina),
        Some(&IconRef::Class("pin".into()))
    );
}

#[test]
fn closed_binding_has_no_injected_identities() {
    let mut binding = FeatureMenuBinding::new(FeatureMenuConfig::default());
    assert!(binding.injected_identities().is_empty());
    assert!(!binding.is_open());

    let id = item_id();
    binding.session = Some(FeatureSession {
        token: 1,
        injected: vec![id],
        hidden: Vec::new(),
    });
    assert_eq!(binding.injected_identities(), &[id]);
}

#[test]
fn feature_configs_are_independent() {
    let mut a = FeatureMenuConfig::default();
    let b = FeatureMenuConfig::default();
    a.items.push(ItemSpec::action("Only on a"));
    assert!(b.items.is_empty());
    assert!(a.inherit && b.inherit);
    assert!(!FeatureMenuConfig::new(Vec::new()).replacing_global().inherit);
}

#[test]
fn cached_size_is_keyed_by_revision() {
    let mut state = MenuState::default();
    state.cached_size = Some(CachedSize {
        revision: 3,
        size: Size::new(10, 20),
    });
    assert_eq!(state.cached_size(3), Some(Size::new(10, 20)));
    assert_eq!(state.cached_size(4), None);
}
