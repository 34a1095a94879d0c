use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::batch::{self, BatchReport};
use crate::errors::AppError;
use crate::extractor::{ExtractionReport, Extractor};
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::substitution::{InsertPaths, InsertReport, Substituter};

// @module: Application controller for extraction and insertion

/// Main application controller, one entry point per CLI call shape
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Build steps derived from the configuration
    extractor: Extractor,
    substituter: Substituter,
    // @field: Draw progress bars during batches
    show_progress: bool,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        Ok(Self {
            extractor: config.extractor(),
            substituter: config.substituter(),
            config,
            show_progress: false,
        })
    }

    /// Enable or disable progress bars for recursive operations
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract one file into `output_dir`
    pub fn extract_file<P1: AsRef<Path>, P2: AsRef<Path>>(&self, source: P1, output_dir: P2) -> Result<ExtractionReport> {
        let source = source.as_ref();
        if !FileManager::file_exists(source) {
            return Err(AppError::File(format!("Input file does not exist: {:?}", source)).into());
        }

        let report = self
            .extractor
            .extract(source, output_dir)
            .map_err(AppError::from)
            .with_context(|| format!("Failed to extract from {:?}", source))?;

        if report.dangling > 0 {
            warn!(
                "{} run(s) in {:?} end the file without a terminator and are only in the manifest",
                report.dangling, source
            );
        }
        Ok(report)
    }

    /// Extract every file under `input_dir` matching one of `extensions`
    pub fn extract_dir<P1: AsRef<Path>, P2: AsRef<Path>, S: AsRef<str>>(
        &self,
        input_dir: P1,
        output_dir: P2,
        extensions: &[S],
    ) -> Result<BatchReport> {
        let input_dir = input_dir.as_ref();
        if extensions.is_empty() {
            return Err(anyhow!("Please enter at least one file type."));
        }
        if !FileManager::dir_exists(input_dir) {
            return Err(AppError::File(format!("Input directory does not exist: {:?}", input_dir)).into());
        }

        let report = batch::extract_tree(&self.extractor, input_dir, output_dir, extensions, self.show_progress)?;
        self.log_batch_summary("extracted", &report);
        Ok(report)
    }

    /// Insert `lang` translations for `base`, reading `base.tagged` and
    /// `base.<lang>` and writing `base`
    pub fn insert_file<P: AsRef<Path>>(&self, base: P, lang: &str) -> Result<InsertReport> {
        self.check_language(lang);
        let paths = InsertPaths::for_base(base, lang, &self.config.files.tagged_extension);

        let report = self
            .substituter
            .insert_paths(&paths)
            .map_err(AppError::from)
            .with_context(|| format!("Failed to insert translations into {:?}", paths.output))?;
        Ok(report)
    }

    /// Insert `lang` translations into every tagged file under `dir`
    pub fn insert_dir<P: AsRef<Path>>(&self, dir: P, lang: &str) -> Result<BatchReport> {
        let dir = dir.as_ref();
        if !FileManager::dir_exists(dir) {
            return Err(AppError::File(format!("Directory does not exist: {:?}", dir)).into());
        }
        self.check_language(lang);

        let report = batch::insert_tree(
            &self.substituter,
            dir,
            lang,
            &self.config.files.tagged_extension,
            self.show_progress,
        )?;
        self.log_batch_summary("translated", &report);
        Ok(report)
    }

    fn check_language(&self, lang: &str) {
        match language_utils::get_language_name(lang) {
            Ok(name) => info!("Target language: {} ({})", name, lang),
            Err(_) => warn!("'{}' is not an ISO 639 language code, using it as a file suffix anyway", lang),
        }
    }

    fn log_batch_summary(&self, verb: &str, report: &BatchReport) {
        if report.is_success() {
            info!("Finished: {} {} files", report.processed.len(), verb);
        } else {
            warn!(
                "Finished: {} {} files, {} failed",
                report.processed.len(),
                verb,
                report.failures.len()
            );
        }
    }
}
