//! Atlas configuration
//!
//! Page geometry, the asset filter used by rebuilds and the fallback pattern.
//! Every field has a default, so a TOML file only needs the keys it overrides.

use crate::constants;
use crate::error::{AtlasError, AtlasResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest page edge accepted by `validate`
pub const MAX_PAGE_DIMENSION: u32 = 16384;

/// Main atlas configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub page_width: u32,
    pub page_height: u32,
    pub channels: u32,
    pub namespace: String,
    pub path_prefix: String,
    pub path_suffix: String,
    pub fallback: FallbackConfig,
}

/// Checkerboard placeholder settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Edge length in pixels; the placeholder is always square
    pub size: u32,
    pub primary: [u8; 4],
    pub secondary: [u8; 4],
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            page_width: constants::page::WIDTH,
            page_height: constants::page::HEIGHT,
            channels: constants::page::CHANNELS,
            namespace: constants::assets::NAMESPACE.to_string(),
            path_prefix: constants::assets::PATH_PREFIX.to_string(),
            path_suffix: constants::assets::PATH_SUFFIX.to_string(),
            fallback: FallbackConfig::default(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            size: constants::fallback::SIZE,
            primary: constants::fallback::PRIMARY,
            secondary: constants::fallback::SECONDARY,
        }
    }
}

impl AtlasConfig {
    /// Config with a custom page size and default everything else
    pub fn with_page_size(page_width: u32, page_height: u32) -> Self {
        Self {
            page_width,
            page_height,
            ..Default::default()
        }
    }

    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(source: &str) -> AtlasResult<Self> {
        let config: AtlasConfig = toml::from_str(source).map_err(|e| AtlasError::InvalidConfig {
            field: "toml".to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading atlas config {}", path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("parsing atlas config {}", path.display()))?;
        log::info!("[AtlasConfig::load] Loaded atlas config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> AtlasResult<()> {
        if self.page_width == 0 || self.page_height == 0 {
            return Err(invalid("page_width/page_height", "page dimensions cannot be 0"));
        }

        if self.page_width > MAX_PAGE_DIMENSION || self.page_height > MAX_PAGE_DIMENSION {
            return Err(invalid(
                "page_width/page_height",
                format!(
                    "{}x{} exceeds maximum of {}x{}",
                    self.page_width, self.page_height, MAX_PAGE_DIMENSION, MAX_PAGE_DIMENSION
                ),
            ));
        }

        if self.channels != constants::page::CHANNELS {
            return Err(invalid(
                "channels",
                format!(
                    "only {}-channel RGBA pages are supported, got {}",
                    constants::page::CHANNELS,
                    self.channels
                ),
            ));
        }

        if self.path_prefix.is_empty() && self.path_suffix.is_empty() {
            return Err(invalid(
                "path_prefix/path_suffix",
                "at least one of prefix or suffix must be set",
            ));
        }

        if self.fallback.size == 0 {
            return Err(invalid("fallback.size", "cannot be 0"));
        }

        if self.fallback.size > self.page_width || self.fallback.size > self.page_height {
            return Err(invalid(
                "fallback.size",
                format!(
                    "{} does not fit a {}x{} page",
                    self.fallback.size, self.page_width, self.page_height
                ),
            ));
        }

        log::debug!(
            "[AtlasConfig::validate] page={}x{}x{}, assets={}:{}*{}",
            self.page_width,
            self.page_height,
            self.channels,
            self.namespace,
            self.path_prefix,
            self.path_suffix
        );
        Ok(())
    }

    /// Bytes in one page buffer
    pub fn page_bytes(&self) -> usize {
        self.page_width as usize * self.page_height as usize * self.channels as usize
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> AtlasError {
    AtlasError::InvalidConfig {
        field: field.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AtlasConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_width, 1024);
        assert_eq!(config.page_height, 1024);
        assert_eq!(config.channels, 4);
        assert_eq!(config.path_prefix, "textures/blocks/");
        assert_eq!(config.page_bytes(), 1024 * 1024 * 4);
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = AtlasConfig::with_page_size(0, 16);
        assert!(matches!(
            config.validate(),
            Err(AtlasError::InvalidConfig { .. })
        ));

        let config = AtlasConfig {
            channels: 3,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let mut config = AtlasConfig::with_page_size(4, 4);
        config.fallback.size = 8;
        assert!(config.validate().is_err());

        let config = AtlasConfig::with_page_size(MAX_PAGE_DIMENSION + 1, 16);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AtlasConfig::from_toml_str(
            r#"
            page_width = 256
            page_height = 128
            path_prefix = "textures/items/"

            [fallback]
            size = 4
            "#,
        )
        .expect("Failed to parse config");

        assert_eq!(config.page_width, 256);
        assert_eq!(config.page_height, 128);
        assert_eq!(config.path_prefix, "textures/items/");
        assert_eq!(config.path_suffix, ".png");
        assert_eq!(config.fallback.size, 4);
        assert_eq!(config.fallback.secondary, [255, 0, 255, 255]);
    }

    #[test]
    fn test_toml_validation_runs() {
        let result = AtlasConfig::from_toml_str("channels = 1");
        assert!(matches!(result, Err(AtlasError::InvalidConfig { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "namespace = \"hearth\"").expect("Failed to write config");

        let config = AtlasConfig::load(file.path()).expect("Failed to load config");
        assert_eq!(config.namespace, "hearth");

        assert!(AtlasConfig::load("/nonexistent/atlas.toml").is_err());
    }
}
