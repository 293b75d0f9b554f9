//! # Configuration Utilities
//!
//! TOML configuration for the steganography tool. Every section is optional;
//! a missing file section falls back to the defaults below.
//!
//! ```toml
//! [output]
//! prefix = "encrypted_"
//! format = "png"
//!
//! [scan]
//! order = "column_major"
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{Context, Result};
use image::ImageFormat;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::processing::grid::ScanOrder;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: StegoConfig = load_config("config/stego.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content =
        fs::read_to_string(path).with_context(|| format!("reading config file {}", path))?;
    let config: T =
        toml::from_str(&content).with_context(|| format!("parsing config file {}", path))?;
    Ok(config)
}

/// Complete tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    pub output: OutputConfig,
    pub scan: ScanConfig,
    pub logging: LoggingConfig,
}

/// Naming and format of the encoded carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Prepended to the input file stem (e.g. "encrypted_photo.png")
    pub prefix: String,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: "encrypted_".to_string(),
            format: OutputFormat::Png,
        }
    }
}

/// Lossless formats the encoded carrier may be written in.
///
/// Lossy formats would destroy the LSBs, so they are not representable here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Bmp,
    Tiff,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tiff",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub order: ScanOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of: off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse()
            .with_context(|| format!("invalid log level '{}'", self.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StegoConfig::default();
        assert_eq!(config.output.prefix, "encrypted_");
        assert_eq!(config.output.format, OutputFormat::Png);
        assert_eq!(config.scan.order, ScanOrder::ColumnMajor);
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: StegoConfig = toml::from_str("[scan]\norder = \"row_major\"\n").unwrap();
        assert_eq!(config.scan.order, ScanOrder::RowMajor);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_lossy_format_rejected() {
        let result: std::result::Result<StegoConfig, _> =
            toml::from_str("[output]\nformat = \"jpeg\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let logging = LoggingConfig {
            level: "loud".to_string(),
        };
        assert!(logging.level_filter().is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[output]\nprefix = \"hidden_\"\nformat = \"bmp\"\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config: StegoConfig = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.output.prefix, "hidden_");
        assert_eq!(config.output.format, OutputFormat::Bmp);
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_missing_config_file() {
        let result: Result<StegoConfig> = load_config("/nonexistent/stego.toml");
        assert!(result.is_err());
    }
}
