use tracing::{debug, trace};

use super::types::{MonitorSnapshot, ScaleFactor};
use crate::MonitorResult;
use crate::config::ResolverConfig;
use crate::platform::{DisplayBackend, SystemBackend};

/// Outcome of resolving the monitor under the cursor.
///
/// Callers only learn *whether* a monitor was found. On `Unresolved` they
/// should fall back to a layout that does not depend on any monitor.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    Resolved(MonitorSnapshot),
    Unresolved,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn snapshot(&self) -> Option<&MonitorSnapshot> {
        match self {
            Self::Resolved(snapshot) => Some(snapshot),
            Self::Unresolved => None,
        }
    }

    pub fn into_snapshot(self) -> Option<MonitorSnapshot> {
        self.into()
    }
}

impl From<Resolution> for Option<MonitorSnapshot> {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Resolved(snapshot) => Some(snapshot),
            Resolution::Unresolved => None,
        }
    }
}

/// Builds a [`MonitorSnapshot`] for the display under the pointer.
///
/// Holds no state between calls; every call queries the OS afresh, so a
/// shared `&MonitorSnapshotResolver` can be used from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct MonitorSnapshotResolver<B = SystemBackend> {
    backend: B,
    config: ResolverConfig,
}

impl MonitorSnapshotResolver<SystemBackend> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self::with_backend(SystemBackend::default(), config)
    }
}

impl<B: DisplayBackend> MonitorSnapshotResolver<B> {
    pub fn with_backend(backend: B, config: ResolverConfig) -> Self {
        Self { backend, config }
    }

    /// Snapshot the monitor that currently contains the mouse cursor.
    ///
    /// A pointer outside every display resolves to the nearest one. Failing
    /// to read the pointer, find any display, or read its geometry yields
    /// [`Resolution::Unresolved`]. A failed DPI read never does; the scale
    /// factor falls back to `1.0` instead.
    pub fn resolve_at_cursor(&self) -> Resolution {
        match self.resolve_geometry() {
            Ok(snapshot) => Resolution::Resolved(snapshot),
            Err(e) => {
                debug!("monitor under cursor unresolved: {e}");
                Resolution::Unresolved
            }
        }
    }

    fn resolve_geometry(&self) -> MonitorResult<MonitorSnapshot> {
        let cursor = self.backend.cursor_position()?;
        trace!(x = cursor.x, y = cursor.y, "cursor position");

        let descriptor = {
            let handle = self.backend.display_at(cursor)?;
            self.backend.descriptor(&handle)?
        };

        Ok(MonitorSnapshot::new(
            descriptor.work_area,
            descriptor.monitor_area,
            descriptor.is_primary,
            self.scale_factor(),
        ))
    }

    /// Desktop-wide scale factor.
    ///
    /// This reads the screen DC, not the resolved display, so on setups with
    /// per-monitor scaling a secondary display reports the primary's scale.
    fn scale_factor(&self) -> ScaleFactor {
        let dpi = match self.backend.desktop_dpi() {
            Ok(dpi) => dpi,
            Err(e) => {
                debug!("desktop dpi unavailable, assuming unscaled: {e}");
                return ScaleFactor::ONE;
            }
        };
        trace!(dpi, reference = self.config.reference_dpi, "desktop dpi");

        ScaleFactor::from_dpi(dpi, self.config.reference_dpi).unwrap_or_else(|| {
            debug!(dpi, "desktop dpi is not positive, assuming unscaled");
            ScaleFactor::ONE
        })
    }
}
