use std::cell::RefCell;
use std::rc::Rc;

use crate::kernel::effect::Notification;

/// Observer for menu notifications.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

impl<F> Notifier for F
where
    F: FnMut(&Notification),
{
    fn notify(&mut self, notification: &Notification) {
        self(notification)
    }
}

/// Forwards every notification to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: &Notification) {
        tracing::debug!(event = notification.name(), ?notification, "contextmenu");
    }
}

/// Shared in-memory log; clones see the same buffer.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    inner: Rc<RefCell<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.inner.borrow_mut())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.inner.borrow().iter().map(Notification::name).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: &Notification) {
        self.inner.borrow_mut().push(notification.clone());
    }
}
