use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::classifier::{Classifier, DEFAULT_CONNECTORS, MarkerRule};
use crate::errors::AppError;
use crate::extractor::{Extractor, OUT_EXT, TAG_EXT};
use crate::file_utils::FileManager;
use crate::scanner::RunScanner;
use crate::substitution::Substituter;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Insertion settings
    #[serde(default)]
    pub insertion: InsertionConfig,

    /// Output file naming
    #[serde(default)]
    pub files: FileConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the run scanner
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Which characters are translatable
    #[serde(default)]
    pub marker_rule: MarkerRule,

    /// Punctuation absorbed into an active run
    #[serde(default = "default_connectors")]
    pub connectors: String,

    /// Write the identifier of a run that is still open at end of line.
    /// Off keeps tagged files compatible with existing ones, where such
    /// runs appear in the manifest only.
    #[serde(default)]
    pub close_trailing_runs: bool,

    /// Remove a leading byte order mark before scanning
    #[serde(default = "default_true")]
    pub strip_bom: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            marker_rule: MarkerRule::default(),
            connectors: default_connectors(),
            close_trailing_runs: false,
            strip_bom: true,
        }
    }
}

/// Settings for the substitution engine
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InsertionConfig {
    /// Prefix `'` in translations with a backslash
    #[serde(default = "default_true")]
    pub escape_single_quotes: bool,
}

impl Default for InsertionConfig {
    fn default() -> Self {
        Self {
            escape_single_quotes: true,
        }
    }
}

/// Suffixes of generated files
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    // @field: Suffix of tagged skeletons
    #[serde(default = "default_tagged_extension")]
    pub tagged_extension: String,

    // @field: Suffix of extraction manifests
    #[serde(default = "default_manifest_extension")]
    pub manifest_extension: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            tagged_extension: default_tagged_extension(),
            manifest_extension: default_manifest_extension(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_connectors() -> String {
    DEFAULT_CONNECTORS.to_string()
}

fn default_true() -> bool {
    true
}

fn default_tagged_extension() -> String {
    TAG_EXT.to_string()
}

fn default_manifest_extension() -> String {
    OUT_EXT.to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Load configuration if the file exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if FileManager::file_exists(path) {
            Self::load(path)
        } else {
            debug!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;
        FileManager::write_to_file(path, &json)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if let Some(c) = self
            .extraction
            .connectors
            .chars()
            .find(|c| !c.is_ascii() || c.is_ascii_control() || c.is_ascii_alphanumeric())
        {
            return Err(AppError::Config(format!("Invalid connector character: {:?}", c)).into());
        }

        for (name, extension) in [
            ("tagged_extension", &self.files.tagged_extension),
            ("manifest_extension", &self.files.manifest_extension),
        ] {
            if extension.is_empty() || extension.contains(['.', '/', '\\']) {
                return Err(AppError::Config(format!("Invalid {}: {:?}", name, extension)).into());
            }
        }

        if self.files.tagged_extension == self.files.manifest_extension {
            return Err(AppError::Config(
                "tagged_extension and manifest_extension must differ".to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// Build the classifier described by this configuration
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.extraction.marker_rule, &self.extraction.connectors)
    }

    /// Build the run scanner described by this configuration
    pub fn scanner(&self) -> RunScanner {
        RunScanner::new(self.classifier())
            .with_close_trailing_runs(self.extraction.close_trailing_runs)
            .with_strip_bom(self.extraction.strip_bom)
    }

    /// Build the extraction writer described by this configuration
    pub fn extractor(&self) -> Extractor {
        Extractor::new(self.scanner())
            .with_extensions(&self.files.tagged_extension, &self.files.manifest_extension)
    }

    /// Build the substitution engine described by this configuration
    pub fn substituter(&self) -> Substituter {
        Substituter::new(self.insertion.escape_single_quotes)
    }
}
