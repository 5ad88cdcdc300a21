use super::{DisplayBackend, DisplayDescriptor};
use crate::monitor::Point;
use crate::{MonitorError, MonitorResult};

/// Backend for targets without a display query implementation.
///
/// Every query fails, so resolution always ends `Unresolved`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedBackend;

impl DisplayBackend for UnsupportedBackend {
    type Handle = ();

    fn cursor_position(&self) -> MonitorResult<Point> {
        Err(MonitorError::Unsupported)
    }

    fn display_at(&self, _point: Point) -> MonitorResult<()> {
        Err(MonitorError::Unsupported)
    }

    fn descriptor(&self, _handle: &()) -> MonitorResult<DisplayDescriptor> {
        Err(MonitorError::Unsupported)
    }

    fn desktop_dpi(&self) -> MonitorResult<i32> {
        Err(MonitorError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MonitorSnapshotResolver, Resolution, ResolverConfig};

    #[test]
    fn every_query_is_unsupported() {
        let backend = UnsupportedBackend;
        assert!(matches!(backend.cursor_position(), Err(MonitorError::Unsupported)));
        assert!(matches!(
            backend.display_at(Point::default()),
            Err(MonitorError::Unsupported)
        ));
        assert!(matches!(backend.descriptor(&()), Err(MonitorError::Unsupported)));
        assert!(matches!(backend.desktop_dpi(), Err(MonitorError::Unsupported)));
    }

    #[test]
    fn resolver_is_unresolved() {
        let resolver =
            MonitorSnapshotResolver::with_backend(UnsupportedBackend, ResolverConfig::default());
        assert_eq!(resolver.resolve_at_cursor(), Resolution::Unresolved);
    }

    #[test]
    fn system_resolution_is_unresolved() {
        assert_eq!(crate::resolve_at_cursor(), Resolution::Unresolved);
    }
}
