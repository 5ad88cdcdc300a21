//! Which monitor is the mouse cursor on, and how much of it is usable?
//!
//! [`resolve_at_cursor`] answers with a [`MonitorSnapshot`]: the monitor's
//! bounds, its work area (bounds minus taskbars), whether it is the primary
//! display, and the desktop scale factor used to turn native pixels into
//! logical ones.
//!
//! ```no_run
//! use cursor_monitor::Resolution;
//!
//! match cursor_monitor::resolve_at_cursor() {
//!     Resolution::Resolved(monitor) => println!(
//!         "{}x{} logical work area",
//!         monitor.logical_work_area_width(),
//!         monitor.logical_work_area_height(),
//!     ),
//!     Resolution::Unresolved => println!("no monitor, using default layout"),
//! }
//! ```

mod config;
mod error;
pub mod monitor;
pub mod platform;

pub use config::{BASE_DPI, ResolverConfig};
pub use error::{MonitorError, MonitorResult};
pub use monitor::{MonitorSnapshot, MonitorSnapshotResolver, Point, Rect, Resolution, ScaleFactor};
pub use platform::{DisplayBackend, DisplayDescriptor, SystemBackend};

/// Resolve the monitor under the cursor with the default configuration.
pub fn resolve_at_cursor() -> Resolution {
    MonitorSnapshotResolver::new().resolve_at_cursor()
}
