//! OS display queries.
//!
//! Everything that touches native structures lives behind [`DisplayBackend`];
//! the resolver only ever sees [`Point`], [`Rect`] and raw DPI values.

use crate::MonitorResult;
use crate::monitor::{Point, Rect};

#[cfg(windows)]
mod win32;
#[cfg(windows)]
pub use win32::Win32Backend;

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
pub use unsupported::UnsupportedBackend;

/// Backend used by [`crate::resolve_at_cursor`] on the current target.
#[cfg(windows)]
pub type SystemBackend = Win32Backend;
#[cfg(not(windows))]
pub type SystemBackend = UnsupportedBackend;

/// Geometry the OS reports for a single display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayDescriptor {
    pub monitor_area: Rect,
    pub work_area: Rect,
    pub is_primary: bool,
}

/// The four native capabilities a snapshot is built from.
pub trait DisplayBackend {
    /// Opaque display identifier, only valid while a single resolution runs.
    type Handle;

    /// Current pointer location.
    fn cursor_position(&self) -> MonitorResult<Point>;

    /// Display containing `point`, or the nearest one when `point` lies
    /// outside every display. Fails only when no display exists at all.
    fn display_at(&self, point: Point) -> MonitorResult<Self::Handle>;

    fn descriptor(&self, handle: &Self::Handle) -> MonitorResult<DisplayDescriptor>;

    /// Horizontal pixel density of the desktop-wide device context.
    ///
    /// Implementations must release whatever they acquire before returning,
    /// on success and on failure.
    fn desktop_dpi(&self) -> MonitorResult<i32>;
}

impl<B: DisplayBackend + ?Sized> DisplayBackend for &B {
    type Handle = B::Handle;

    fn cursor_position(&self) -> MonitorResult<Point> {
        (**self).cursor_position()
    }

    fn display_at(&self, point: Point) -> MonitorResult<Self::Handle> {
        (**self).display_at(point)
    }

    fn descriptor(&self, handle: &Self::Handle) -> MonitorResult<DisplayDescriptor> {
        (**self).descriptor(handle)
    }

    fn desktop_dpi(&self) -> MonitorResult<i32> {
        (**self).desktop_dpi()
    }
}
