use crate::core::ItemId;
use crate::kernel::services::ports::Notifier;
use crate::kernel::state::{ItemCallback, ItemInvocation, ShowLocation};

/// Notifications emitted to the host, in the order they happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    ItemAdded { id: ItemId, index: usize },
    ItemRemoved { id: ItemId },
    ItemEnabled { id: ItemId },
    ItemDisabled { id: ItemId },
    Shown { location: ShowLocation },
    Hidden,
    Selected { id: ItemId },
}

impl Notification {
    pub fn name(&self) -> &'static str {
        match self {
            Notification::ItemAdded { .. } => "additem",
            Notification::ItemRemoved { .. } => "removeitem",
            Notification::ItemEnabled { .. } => "enableitem",
            Notification::ItemDisabled { .. } => "disableitem",
            Notification::Shown { .. } => "show",
            Notification::Hidden => "hide",
            Notification::Selected { .. } => "select",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Effect {
    Notify(Notification),
    InvokeItem {
        callback: ItemCallback,
        invocation: ItemInvocation,
    },
}

impl Effect {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Effect::Notify(n) => Some(n),
            Effect::InvokeItem { .. } => None,
        }
    }

    pub fn run(self, notifier: &mut dyn Notifier) {
        match self {
            Effect::Notify(notification) => notifier.notify(&notification),
            Effect::InvokeItem {
                callback,
                invocation,
            } => callback.call(&invocation),
        }
    }
}
