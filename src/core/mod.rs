//! 核心类型模块
//!
//! - geom: 屏幕坐标与地理坐标
//! - id: 菜单项与要素的身份标识
//! - event: 宿主地图投递的输入事件

pub mod event;
pub mod geom;
pub mod id;

pub use event::{KeyCode, MapEvent, PointerKind, Trigger, TriggerSource};
pub use geom::{LatLng, Point, Rect, Size};
pub use id::{FeatureId, ItemId};
