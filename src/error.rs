use thiserror::Error;

/// Reasons a display query can fail.
///
/// These never reach callers of the resolver: they are logged and folded into
/// [`Resolution::Unresolved`](crate::Resolution::Unresolved), or into the
/// `1.0` scale fallback for the DPI read.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// A Win32 call returned a failing HRESULT.
    #[error("{function} failed (error {code:#010x})")]
    Win32 { function: &'static str, code: u32 },

    /// A BOOL-returning Win32 call reported failure.
    #[error("{function} failed")]
    Win32Call { function: &'static str },

    #[error("no display could be resolved")]
    NoDisplay,

    #[error("{area} rectangle is inverted")]
    InvalidGeometry { area: &'static str },

    #[error("invalid resolver configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("display queries are not supported on this platform")]
    Unsupported,
}

impl MonitorError {
    #[cfg(windows)]
    pub(crate) fn win32(function: &'static str, err: &windows::core::Error) -> Self {
        // HRESULT.0 is i32; reinterpret the bits for display.
        Self::Win32 {
            function,
            code: err.code().0 as u32,
        }
    }
}

pub type MonitorResult<T> = Result<T, MonitorError>;
