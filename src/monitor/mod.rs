mod resolve;
mod types;

pub use resolve::{MonitorSnapshotResolver, Resolution};
pub use types::{MonitorSnapshot, Point, Rect, ScaleFactor};
