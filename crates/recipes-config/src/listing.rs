//! Listing page-size configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_page_size() -> u32 {
    20
}

const fn default_max_page_size() -> u32 {
    2000
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ListingConfig {
    /// Page size used when a list request does not give one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Larger requested sizes are clamped to this.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl ListingConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::invalid(
                "listing.default_page_size",
                "must be greater than zero",
            ));
        }
        if self.max_page_size < self.default_page_size {
            return Err(ConfigError::invalid(
                "listing.max_page_size",
                format!(
                    "must be at least listing.default_page_size ({})",
                    self.default_page_size
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ListingConfig::default();
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.max_page_size, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_default_size_is_invalid() {
        let config = ListingConfig {
            default_page_size: 0,
            ..ListingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn max_below_default_is_invalid() {
        let config = ListingConfig {
            default_page_size: 50,
            max_page_size: 10,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("listing.max_page_size"));
    }
}
