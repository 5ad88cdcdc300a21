/// A location in virtual-screen pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in virtual-screen pixel coordinates.
///
/// Edges follow the Win32 `RECT` convention: `right` and `bottom` are
/// exclusive. A rectangle is never inverted, but it may have zero area.
/// Its width and height always fit in an `i32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    /// Returns `None` when `right < left`, `bottom < top`, or either
    /// dimension overflows `i32`.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Option<Self> {
        if right < left || bottom < top {
            return None;
        }
        if right.checked_sub(left).is_none() || bottom.checked_sub(top).is_none() {
            return None;
        }
        Some(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    pub const fn left(&self) -> i32 {
        self.left
    }

    pub const fn top(&self) -> i32 {
        self.top
    }

    pub const fn right(&self) -> i32 {
        self.right
    }

    pub const fn bottom(&self) -> i32 {
        self.bottom
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.right
            && point.y >= self.top
            && point.y < self.bottom
    }
}

/// Ratio of device pixels to logical pixels. Always finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Unscaled (100 %).
    pub const ONE: Self = Self(1.0);

    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// `dpi / reference`, or `None` when either side is not positive.
    pub fn from_dpi(dpi: i32, reference: u32) -> Option<Self> {
        if dpi <= 0 || reference == 0 {
            return None;
        }
        Self::new(f64::from(dpi) / f64::from(reference))
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    /// Convert a native pixel measurement to logical pixels.
    pub fn to_logical(self, native: i32) -> f64 {
        f64::from(native) / self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::ONE
    }
}

/// Geometry of the monitor under the cursor at a single point in time.
///
/// Rectangles are in native pixels. The `logical_*` getters divide by the
/// scale factor and are what window placement should consume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonitorSnapshot {
    work_area: Rect,
    monitor_area: Rect,
    is_primary: bool,
    scale_factor: ScaleFactor,
}

impl MonitorSnapshot {
    pub const fn new(
        work_area: Rect,
        monitor_area: Rect,
        is_primary: bool,
        scale_factor: ScaleFactor,
    ) -> Self {
        Self {
            work_area,
            monitor_area,
            is_primary,
            scale_factor,
        }
    }

    /// Monitor bounds minus taskbars and other reserved desktop UI.
    pub const fn work_area(&self) -> Rect {
        self.work_area
    }

    pub const fn monitor_area(&self) -> Rect {
        self.monitor_area
    }

    pub const fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub const fn scale_factor(&self) -> ScaleFactor {
        self.scale_factor
    }

    pub const fn width(&self) -> i32 {
        self.monitor_area.width()
    }

    pub const fn height(&self) -> i32 {
        self.monitor_area.height()
    }

    pub const fn work_area_width(&self) -> i32 {
        self.work_area.width()
    }

    pub const fn work_area_height(&self) -> i32 {
        self.work_area.height()
    }

    pub fn logical_work_area_left(&self) -> f64 {
        self.scale_factor.to_logical(self.work_area.left())
    }

    pub fn logical_work_area_top(&self) -> f64 {
        self.scale_factor.to_logical(self.work_area.top())
    }

    pub fn logical_work_area_width(&self) -> f64 {
        self.scale_factor.to_logical(self.work_area_width())
    }

    pub fn logical_work_area_height(&self) -> f64 {
        self.scale_factor.to_logical(self.work_area_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(l: i32, t: i32, r: i32, b: i32) -> Rect {
        Rect::new(l, t, r, b).unwrap()
    }

    #[test]
    fn rect_dimensions() {
        let r = rect(-1920, 100, 0, 1180);
        assert_eq!(r.width(), 1920);
        assert_eq!(r.height(), 1080);
    }

    #[test]
    fn degenerate_rect_is_kept() {
        let r = rect(50, 60, 50, 60);
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 0);
        assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (50, 60, 50, 60));
    }

    #[test]
    fn oversized_rect_is_rejected() {
        assert!(Rect::new(i32::MIN, 0, i32::MAX, 1).is_none());
        assert!(Rect::new(0, i32::MIN, 1, i32::MAX).is_none());
        assert!(Rect::new(-1, 0, i32::MAX, 1).is_none());

        let widest = Rect::new(0, i32::MIN, i32::MAX, -1).unwrap();
        assert_eq!(widest.width(), i32::MAX);
        assert_eq!(widest.height(), i32::MAX);

        let snapshot = MonitorSnapshot::new(widest, widest, true, ScaleFactor::ONE);
        assert_eq!(snapshot.width(), i32::MAX);
        assert_eq!(snapshot.work_area_height(), i32::MAX);
    }

    #[test]
    fn inverted_rect_is_rejected() {
        assert!(Rect::new(10, 0, 9, 5).is_none());
        assert!(Rect::new(0, 10, 5, 9).is_none());
    }

    #[test]
    fn contains_excludes_right_and_bottom_edges() {
        let r = rect(0, 0, 1920, 1080);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(1919, 1079)));
        assert!(!r.contains(Point::new(1920, 500)));
        assert!(!r.contains(Point::new(500, 1080)));
        assert!(!rect(5, 5, 5, 5).contains(Point::new(5, 5)));
    }

    #[test]
    fn scale_from_dpi() {
        assert_eq!(ScaleFactor::from_dpi(96, 96), Some(ScaleFactor::ONE));
        assert_eq!(ScaleFactor::from_dpi(120, 96).map(ScaleFactor::get), Some(1.25));
        assert_eq!(ScaleFactor::from_dpi(192, 96).map(ScaleFactor::get), Some(2.0));
    }

    #[test]
    fn scale_rejects_non_positive() {
        assert!(ScaleFactor::from_dpi(0, 96).is_none());
        assert!(ScaleFactor::from_dpi(-96, 96).is_none());
        assert!(ScaleFactor::from_dpi(96, 0).is_none());
        assert!(ScaleFactor::new(0.0).is_none());
        assert!(ScaleFactor::new(-1.0).is_none());
        assert!(ScaleFactor::new(f64::NAN).is_none());
        assert!(ScaleFactor::new(f64::INFINITY).is_none());
    }

    #[test]
    fn default_scale_is_one() {
        assert_eq!(ScaleFactor::default().get(), 1.0);
    }

    #[test]
    fn logical_work_area_divides_by_scale() {
        let scale = ScaleFactor::new(1.25).unwrap();
        let snapshot = MonitorSnapshot::new(
            rect(0, 40, 1600, 900),
            rect(0, 0, 1600, 900),
            false,
            scale,
        );
        assert_eq!(snapshot.work_area_width(), 1600);
        assert_eq!(snapshot.logical_work_area_width(), 1280.0);
        assert_eq!(snapshot.logical_work_area_top(), 32.0);
        assert_eq!(snapshot.logical_work_area_height(), 688.0);
    }

    #[test]
    fn single_display_at_base_dpi() {
        let snapshot = MonitorSnapshot::new(
            rect(0, 0, 1920, 1040),
            rect(0, 0, 1920, 1080),
            true,
            ScaleFactor::from_dpi(96, 96).unwrap(),
        );
        assert_eq!(snapshot.scale_factor(), ScaleFactor::ONE);
        assert!(snapshot.is_primary());
        assert_eq!(snapshot.width(), 1920);
        assert_eq!(snapshot.height(), 1080);
        assert_eq!(snapshot.work_area_height(), 1040);
        assert_eq!(snapshot.logical_work_area_left(), 0.0);
        assert_eq!(snapshot.logical_work_area_height(), 1040.0);
    }

    #[test]
    fn degenerate_work_area_has_zero_logical_size() {
        let snapshot = MonitorSnapshot::new(
            rect(100, 100, 100, 100),
            rect(0, 0, 800, 600),
            false,
            ScaleFactor::new(1.5).unwrap(),
        );
        assert_eq!(snapshot.work_area_width(), 0);
        assert_eq!(snapshot.logical_work_area_width(), 0.0);
        assert_eq!(snapshot.logical_work_area_height(), 0.0);
    }
}
