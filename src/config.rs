//! Render and logging configuration.
//!
//! A render request is described by [`RenderOptions`]. The command-line tool can also read a TOML
//! file holding `[render]` and `[logging]` tables:
//!
//! ```toml
//! [render]
//! payload = "https://example.com"
//! errorCorrectionLevel = "Q"
//! pixelSize = 160
//! margin = 4
//!
//! [logging]
//! level = "debug"
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::helper::DEFAULT_MARGIN;
use crate::qrcode::{QrCodeEcc, Version};

/// Default edge length of the rendered bitmap, in pixels.
pub const DEFAULT_PIXEL_SIZE: u32 = 128;

/// Environment variable overriding [`LoggingOptions::level`].
pub const LOG_LEVEL_ENV: &str = "QRCANVAS_LOG";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderOptions,
    pub logging: LoggingOptions,
}

impl Config {
    /// Read configuration from a TOML file and apply environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;
        let mut config: Self = toml::from_str(&contents).map_err(|e| {
            Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
        })?;
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(format!("Failed to parse TOML: {e}")))
    }
}

/// Options for a single QR render request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Text to encode. Must be non-empty when rendering.
    pub payload: String,
    /// Error correction level, `M` unless set.
    pub error_correction_level: QrCodeEcc,
    /// Edge length of the output bitmap in pixels.
    pub pixel_size: u32,
    /// Quiet zone in modules.
    pub margin: u32,
    /// Explicit version (1 to 40); the smallest fitting version otherwise.
    pub version: Option<u32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            payload: String::new(),
            error_correction_level: QrCodeEcc::default(),
            pixel_size: DEFAULT_PIXEL_SIZE,
            margin: DEFAULT_MARGIN,
            version: None,
        }
    }
}

impl RenderOptions {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }

    pub fn error_correction_level(mut self, ecl: QrCodeEcc) -> Self {
        self.error_correction_level = ecl;
        self
    }

    pub fn pixel_size(mut self, pixel_size: u32) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// The validated version override, if any.
    pub fn version(&self) -> Result<Option<Version>> {
        self.version.map(Version::try_from).transpose()
    }
}

/// Logging configuration for the command-line tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// `tracing` filter directive, e.g. `info` or `qrcanvas=debug`.
    pub level: String,
    /// Colored output on stderr.
    pub color: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            color: true,
        }
    }
}

impl LoggingOptions {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            if !level.trim().is_empty() {
                self.level = level;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::new("https://example.com");
        assert_eq!(options.error_correction_level, QrCodeEcc::Medium);
        assert_eq!(options.pixel_size, 128);
        assert_eq!(options.margin, 4);
        assert_eq!(options.version().unwrap(), None);
    }

    #[test]
    fn test_parse_camel_case_keys() {
        let config = Config::from_toml_str(
            r#"
            [render]
            payload = "https://example.com"
            errorCorrectionLevel = "H"
            pixelSize = 160
            version = 3

            [logging]
            level = "debug"
            color = false
            "#,
        )
        .unwrap();
        assert_eq!(config.render.payload, "https://example.com");
        assert_eq!(config.render.error_correction_level, QrCodeEcc::High);
        assert_eq!(config.render.pixel_size, 160);
        assert_eq!(config.render.margin, 4);
        assert_eq!(config.render.version().unwrap(), Some(Version::new(3)));
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.color);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.render, RenderOptions::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_values_are_reported() {
        assert!(matches!(
            Config::from_toml_str("[render]\nerrorCorrectionLevel = \"Z\""),
            Err(Error::Config(_))
        ));
        let options = RenderOptions::new("x").with_version(41);
        assert!(matches!(options.version(), Err(Error::InvalidVersion(41))));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = std::env::temp_dir().join(format!("qrcanvas-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("qrcanvas.toml");
        fs::write(&path, "[render]\npixelSize = 160\nmargin = 2\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.render.pixel_size, 160);
        assert_eq!(config.render.margin, 2);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/qrcanvas.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/qrcanvas.toml"));
    }
}
