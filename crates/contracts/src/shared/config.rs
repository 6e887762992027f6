use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub inventory: InventoryConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Rows per table page
    pub page_size: usize,
    /// Choices offered by the page size selector
    pub page_size_options: Vec<usize>,
    /// `stock` strictly below this counts as low stock
    pub low_stock_threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[inventory]
page_size = 7
page_size_options = [7, 14, 28]
low_stock_threshold = 10

[notifications]
toast_duration_ms = 3000
"#;

/// Optional overrides (the frontend reads them from the query string)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    pub page_size: Option<usize>,
    pub low_stock_threshold: Option<u32>,
}

impl DashboardConfig {
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(size) = overrides.page_size {
            self.inventory.page_size = size;
            if !self.inventory.page_size_options.contains(&size) {
                self.inventory.page_size_options.push(size);
                self.inventory.page_size_options.sort_unstable();
            }
        }
        if let Some(threshold) = overrides.low_stock_threshold {
            self.inventory.low_stock_threshold = threshold;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.inventory.page_size == 0 {
            bail!("inventory.page_size must be at least 1");
        }
        if self.inventory.page_size_options.iter().any(|&s| s == 0) {
            bail!("inventory.page_size_options must not contain 0");
        }
        if self.inventory.low_stock_threshold == 0 {
            bail!("inventory.low_stock_threshold must be at least 1");
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            inventory: InventoryConfig {
                page_size: 7,
                page_size_options: vec![7, 14, 28],
                low_stock_threshold: 10,
            },
            notifications: NotificationConfig {
                toast_duration_ms: 3000,
            },
        }
    }
}

/// Parse a configuration document and validate it
pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig =
        toml::from_str(contents).context("Failed to parse dashboard configuration")?;
    config.validate()?;
    Ok(config)
}

/// Embedded defaults with `overrides` applied
pub fn load_config(overrides: &ConfigOverrides) -> anyhow::Result<DashboardConfig> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    config.apply(overrides);
    config
        .validate()
        .with_context(|| format!("Invalid configuration overrides: {:?}", overrides))?;
    log::debug!("Dashboard config loaded: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.inventory.page_size, 7);
    }

    #[test]
    fn test_overrides_apply() {
        let overrides = ConfigOverrides {
            page_size: Some(10),
            low_stock_threshold: Some(5),
        };
        let config = load_config(&overrides).unwrap();
        assert_eq!(config.inventory.page_size, 10);
        assert_eq!(config.inventory.page_size_options, vec![7, 10, 14, 28]);
        assert_eq!(config.inventory.low_stock_threshold, 5);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let overrides = ConfigOverrides {
            page_size: Some(0),
            ..Default::default()
        };
        assert!(load_config(&overrides).is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(parse_config("[inventory]\npage_size = \"seven\"").is_err());
    }
}
