//! Headless menu core (state/action/effect).

pub mod action;
pub mod effect;
pub mod position;
pub mod registry;
pub mod services;
pub mod state;
pub mod store;

pub use action::{Action, ShowTarget};
pub use effect::{Effect, Notification};
pub use position::{EdgeOffset, Placement};
pub use registry::{ItemRegistry, ItemRef};
pub use state::{
    ActionItem, EntryKind, Feature, FeatureMenuBinding, FeatureMenuConfig, FeatureSession,
    IconRef, ItemCallback, ItemInvocation, ItemSpec, MenuEntry, MenuState, PanelDisplay,
    PanelEntry, PanelEntryKind, PanelView, ShowLocation,
};
pub use store::{DispatchResult, Store};
