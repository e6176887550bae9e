//! Service ports: traits + data contracts.

pub mod host;
pub mod measure;
pub mod notifier;
pub mod settings;

pub use host::{Capabilities, MapHost};
pub use measure::TextMetrics;
pub use notifier::{NotificationLog, Notifier, TracingNotifier};
pub use settings::MenuSettings;
