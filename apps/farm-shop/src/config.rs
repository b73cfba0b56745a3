//! Shop configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then command line flags override whatever they set.
//!
//! | Variable               | Default      | Meaning                          |
//! |------------------------|--------------|----------------------------------|
//! | `FARM_SHOP_NAME`       | `Farm MVP`   | Name in the welcome banner       |
//! | `FARM_RECEIPT_WIDTH`   | `42`         | Receipt columns (30 to 120)      |
//! | `FARM_FANCY_INVENTORY` | `false`      | Enable quantity stock operations |

use std::env;

use farm_core::validation::validate_receipt_width;
use farm_core::{ValidationError, DEFAULT_RECEIPT_WIDTH};

pub const DEFAULT_SHOP_NAME: &str = "Farm MVP";

/// Shop configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Name shown in the welcome banner
    pub shop_name: String,

    /// Receipt width in columns
    pub receipt_width: usize,

    /// Use the quantity-capable inventory
    pub fancy_inventory: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            receipt_width: DEFAULT_RECEIPT_WIDTH,
            fancy_inventory: false,
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ShopConfig::default();

        let config = ShopConfig {
            shop_name: lookup("FARM_SHOP_NAME")
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or(defaults.shop_name),

            receipt_width: match lookup("FARM_RECEIPT_WIDTH") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("FARM_RECEIPT_WIDTH".to_string()))?,
                None => defaults.receipt_width,
            },

            fancy_inventory: match lookup("FARM_FANCY_INVENTORY") {
                Some(raw) => parse_flag(&raw)
                    .ok_or_else(|| ConfigError::InvalidValue("FARM_FANCY_INVENTORY".to_string()))?,
                None => defaults.fancy_inventory,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Applies command line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        shop_name: Option<String>,
        receipt_width: Option<usize>,
        fancy_inventory: bool,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = shop_name {
            self.shop_name = name;
        }
        if let Some(width) = receipt_width {
            self.receipt_width = width;
        }
        self.fancy_inventory |= fancy_inventory;

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_receipt_width(self.receipt_width).map_err(|source| ConfigError::OutOfRange {
            key: "receipt width".to_string(),
            source,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid {key}: {source}")]
    OutOfRange {
        key: String,
        #[source]
        source: ValidationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ShopConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ShopConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), ShopConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = load(&[
            ("FARM_SHOP_NAME", " Hilltop Farm "),
            ("FARM_RECEIPT_WIDTH", "60"),
            ("FARM_FANCY_INVENTORY", "yes"),
        ])
        .unwrap();

        assert_eq!(config.shop_name, "Hilltop Farm");
        assert_eq!(config.receipt_width, 60);
        assert!(config.fancy_inventory);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            load(&[("FARM_RECEIPT_WIDTH", "wide")]),
            Err(ConfigError::InvalidValue(key)) if key == "FARM_RECEIPT_WIDTH"
        ));
        assert!(matches!(
            load(&[("FARM_FANCY_INVENTORY", "maybe")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("FARM_RECEIPT_WIDTH", "10")]),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_overrides_win() {
        let config = load(&[("FARM_RECEIPT_WIDTH", "60")])
            .unwrap()
            .with_overrides(Some("Dale End".to_string()), Some(80), true)
            .unwrap();

        assert_eq!(config.shop_name, "Dale End");
        assert_eq!(config.receipt_width, 80);
        assert!(config.fancy_inventory);

        assert!(ShopConfig::default()
            .with_overrides(None, Some(500), false)
            .is_err());
    }
}
