//! mapmenu - 地图右键菜单核心库
//!
//! 模块结构：
//! - core: 坐标、身份标识与输入事件
//! - kernel: 菜单状态机、菜单项注册表、视口定位与要素绑定
//! - menu: 对外接口（ContextMenu）
//! - logging: tracing 初始化

pub mod core;
pub mod kernel;
pub mod logging;
pub mod menu;

pub use crate::core::{FeatureId, ItemId, LatLng, MapEvent, Point, Size, Trigger, TriggerSource};
pub use crate::kernel::services::ports::{
    Capabilities, MapHost, MenuSettings, NotificationLog, Notifier, TextMetrics, TracingNotifier,
};
pub use crate::kernel::{FeatureMenuConfig, ItemSpec, Notification, ShowTarget};
pub use crate::menu::ContextMenu;
