//! Tinttag Config
//!
//! This crate handles configuration loading and management
//! for tinttag, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/tinttag/config.toml`
//! - macOS: `~/Library/Application Support/tinttag/config.toml`
//! - Windows: `%APPDATA%\tinttag\config.toml`
//!
//! User palette entries are layered on top of the built-in palettes:
//! `[palette.<tag>]` tables extend the full-color palette and
//! `[monochrome.<tag>]` tables extend the monochrome one.
//!
//! # Example
//!
//! ```no_run
//! use tinttag_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file or inline TOML
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod output;
mod palette;

pub use output::{ColorMode, OutputConfig};
pub use palette::PaletteEntry;

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tinttag_ansi::PaletteKind;
use tinttag_core::{Palette, Result, TintError};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[output]
Color      = "auto"
DefaultTag = ""

# Extra or replacement entries for the full-color palette, e.g.
#
# [palette.note]
# Fg   = "cyan"
# Bold = true
#
# [palette.error]
# Start = "\u001b[1;31m"
# Stop  = "\u001b[0m"
[palette]

# Entries for the monochrome palette used on non-color streams.
[monochrome]
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Full-color palette entries
    #[serde(default)]
    pub palette: BTreeMap<String, PaletteEntry>,

    /// Monochrome palette entries
    #[serde(default)]
    pub monochrome: BTreeMap<String, PaletteEntry>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use tinttag_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[output]"));
    /// assert!(toml.contains("[palette]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tinttag")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| TintError::Config("Could not determine config directory".into()))?;
        Self::ensure_config_file_in(&config_dir)
    }

    /// Ensures `config_dir/config.toml` exists, writing the defaults if not.
    ///
    /// An existing file is left untouched.
    pub fn ensure_config_file_in(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            debug!("Writing default config to {}", config_path.display());
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                debug!("Loading config from {}", config_path.display());
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| TintError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TintError::Config(format!("Parse error: {}", e)))
    }

    /// Parse an override given as a file path or as inline TOML.
    ///
    /// An argument naming an existing file is loaded from disk; anything
    /// else is parsed as TOML.
    ///
    /// # Example
    ///
    /// ```
    /// use tinttag_config::{ColorMode, Config};
    ///
    /// let config = Config::override_from("[output]\nColor = \"never\"").unwrap();
    /// assert_eq!(config.output.color, ColorMode::Never);
    /// ```
    pub fn override_from(arg: &str) -> Result<Self> {
        let path = Path::new(arg);
        if path.exists() {
            debug!("Merging config file {}", path.display());
            Self::load_from(path)
        } else {
            debug!("Merging inline config");
            Self::parse(arg)
        }
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. Parse the override with [`Config::override_from`] and merge it
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tinttag_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[output]\nColor = \"never\"")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(arg) = override_config {
            config.merge(&Self::override_from(arg)?);
        }
        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence. Palette entries are merged
    /// per tag.
    ///
    /// # Example
    ///
    /// ```
    /// use tinttag_config::{ColorMode, Config};
    ///
    /// let mut base = Config::default();
    /// let override_config = Config::parse(r#"
    ///     [output]
    ///     Color = "always"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.output.color, ColorMode::Always);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.output.merge(&other.output);
        for (tag, entry) in &other.palette {
            self.palette.insert(tag.clone(), entry.clone());
        }
        for (tag, entry) in &other.monochrome {
            self.monochrome.insert(tag.clone(), entry.clone());
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| TintError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Build the effective palette for `kind`.
    ///
    /// Starts from the built-in palette and layers the matching user
    /// entries on top.
    ///
    /// # Example
    ///
    /// ```
    /// use tinttag_ansi::PaletteKind;
    /// use tinttag_config::Config;
    ///
    /// let config = Config::parse(r#"
    ///     [monochrome.error]
    ///     Start = "!! "
    ///     Stop  = ""
    /// "#).unwrap();
    /// let palette = config.palette(PaletteKind::Monochrome).unwrap();
    /// assert_eq!(palette.get("error").unwrap().start, "!! ");
    /// assert!(palette.contains("important"));
    /// ```
    pub fn palette(&self, kind: PaletteKind) -> Result<Palette> {
        let entries = match kind {
            PaletteKind::FullColor => &self.palette,
            PaletteKind::Monochrome => &self.monochrome,
        };

        let mut palette = kind.palette();
        for (tag, entry) in entries {
            palette.insert(tag.clone(), entry.to_pair()?);
        }
        debug!("Built {} palette with {} entries", kind, palette.len());
        Ok(palette)
    }
}
