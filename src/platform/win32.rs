use windows::Win32::Foundation::{POINT, RECT};
use windows::Win32::Graphics::Gdi::{
    GetDC, GetDeviceCaps, GetMonitorInfoW, HDC, HMONITOR, LOGPIXELSX, MONITOR_DEFAULTTONEAREST,
    MONITORINFO, MonitorFromPoint, ReleaseDC,
};
use windows::Win32::UI::WindowsAndMessaging::{GetCursorPos, MONITORINFOF_PRIMARY};

use super::{DisplayBackend, DisplayDescriptor};
use crate::monitor::{Point, Rect};
use crate::{MonitorError, MonitorResult};

/// Display queries through `user32` / `gdi32`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Win32Backend;

impl DisplayBackend for Win32Backend {
    type Handle = HMONITOR;

    fn cursor_position(&self) -> MonitorResult<Point> {
        let mut pt = POINT::default();
        // SAFETY: `pt` is a valid, writable POINT for the duration of the call.
        unsafe { GetCursorPos(&mut pt) }.map_err(|e| MonitorError::win32("GetCursorPos", &e))?;
        Ok(Point::new(pt.x, pt.y))
    }

    fn display_at(&self, point: Point) -> MonitorResult<HMONITOR> {
        let pt = POINT {
            x: point.x,
            y: point.y,
        };
        // SAFETY: MonitorFromPoint takes its arguments by value and has no
        // preconditions.
        let hmonitor = unsafe { MonitorFromPoint(pt, MONITOR_DEFAULTTONEAREST) };
        if hmonitor.is_invalid() {
            return Err(MonitorError::NoDisplay);
        }
        Ok(hmonitor)
    }

    fn descriptor(&self, handle: &HMONITOR) -> MonitorResult<DisplayDescriptor> {
        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        // SAFETY: `info.cbSize` matches the struct we pass; `handle` came from
        // MonitorFromPoint within the same resolution.
        if !unsafe { GetMonitorInfoW(*handle, &mut info) }.as_bool() {
            return Err(MonitorError::Win32Call {
                function: "GetMonitorInfoW",
            });
        }

        Ok(DisplayDescriptor {
            monitor_area: to_rect(&info.rcMonitor, "monitor")?,
            work_area: to_rect(&info.rcWork, "work area")?,
            is_primary: info.dwFlags & MONITORINFOF_PRIMARY != 0,
        })
    }

    fn desktop_dpi(&self) -> MonitorResult<i32> {
        let dc = ScreenDc::acquire()?;
        Ok(dc.horizontal_dpi())
    }
}

fn to_rect(rc: &RECT, area: &'static str) -> MonitorResult<Rect> {
    Rect::new(rc.left, rc.top, rc.right, rc.bottom).ok_or(MonitorError::InvalidGeometry { area })
}

/// Device context for the whole screen, released on drop.
struct ScreenDc(HDC);

impl ScreenDc {
    fn acquire() -> MonitorResult<Self> {
        // SAFETY: a null window handle requests the screen DC; no other
        // preconditions.
        let hdc = unsafe { GetDC(None) };
        if hdc.is_invalid() {
            return Err(MonitorError::Win32Call { function: "GetDC" });
        }
        Ok(Self(hdc))
    }

    fn horizontal_dpi(&self) -> i32 {
        // SAFETY: `self.0` is a live DC until `drop`.
        unsafe { GetDeviceCaps(Some(self.0), LOGPIXELSX) }
    }
}

impl Drop for ScreenDc {
    fn drop(&mut self) {
        // SAFETY: `self.0` was returned by GetDC(None) and is released once.
        unsafe {
            ReleaseDC(None, self.0);
        }
    }
}
