use bon::bon;

use crate::{MonitorError, MonitorResult};

/// Density that maps to a scale factor of exactly `1.0` on Windows.
pub const BASE_DPI: u32 = 96;

fn validate_reference_dpi(dpi: u32) -> MonitorResult<u32> {
    if dpi == 0 {
        return Err(MonitorError::InvalidConfig {
            reason: "reference dpi cannot be zero".into(),
        });
    }
    Ok(dpi)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Density the desktop DPI is divided by to get the scale factor.
    pub reference_dpi: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            reference_dpi: BASE_DPI,
        }
    }
}

#[bon]
impl ResolverConfig {
    /// Creates a resolver configuration using the builder pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use cursor_monitor::ResolverConfig;
    ///
    /// let config = ResolverConfig::builder().build();
    /// assert_eq!(config.reference_dpi, 96);
    ///
    /// let config = ResolverConfig::builder()
    ///     .reference_dpi(72)
    ///     .unwrap()
    ///     .build();
    /// assert_eq!(config.reference_dpi, 72);
    /// ```
    #[builder]
    pub fn new(
        #[builder(
            default = BASE_DPI,
            with = |dpi: u32| -> Result<_, MonitorError> { validate_reference_dpi(dpi) },
        )]
        reference_dpi: u32,
    ) -> Self {
        Self { reference_dpi }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(ResolverConfig::default().reference_dpi, 96);
    }

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(ResolverConfig::builder().build(), ResolverConfig::default());
    }

    #[test]
    fn builder_custom_reference() {
        let config = ResolverConfig::builder()
            .reference_dpi(120)
            .unwrap()
            .build();
        assert_eq!(config.reference_dpi, 120);
    }

    #[test]
    fn builder_zero_reference_errors() {
        assert!(matches!(
            ResolverConfig::builder().reference_dpi(0),
            Err(MonitorError::InvalidConfig { .. })
        ));
    }
}
