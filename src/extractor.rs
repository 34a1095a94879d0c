/*!
 * Extraction writer.
 *
 * Reads one source document, scans it and persists the tagged skeleton and
 * the extraction manifest under an output directory that mirrors the source
 * path. The source itself is only ever opened for reading.
 */

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ExtractError;
use crate::file_utils::FileManager;
use crate::scanner::{Extraction, RunScanner};

/// Default suffix of tagged skeleton files
pub const TAG_EXT: &str = "tagged";

/// Default suffix of extraction manifests
pub const OUT_EXT: &str = "out";

/// Outcome of extracting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub source: PathBuf,
    pub tagged_path: PathBuf,
    pub manifest_path: PathBuf,
    /// Number of runs found
    pub runs: usize,
    /// Runs whose identifier is missing from the skeleton
    pub dangling: usize,
}

/// Extracts translatable runs from files
#[derive(Debug, Clone)]
pub struct Extractor {
    scanner: RunScanner,
    tagged_extension: String,
    manifest_extension: String,
}

impl Extractor {
    pub fn new(scanner: RunScanner) -> Self {
        Self {
            scanner,
            tagged_extension: TAG_EXT.to_string(),
            manifest_extension: OUT_EXT.to_string(),
        }
    }

    /// Use different suffixes for the two output files
    pub fn with_extensions(mut self, tagged: &str, manifest: &str) -> Self {
        self.tagged_extension = tagged.to_string();
        self.manifest_extension = manifest.to_string();
        self
    }

    pub fn scanner(&self) -> &RunScanner {
        &self.scanner
    }

    /// Paths of the tagged skeleton and manifest for a source file
    pub fn output_paths<P1: AsRef<Path>, P2: AsRef<Path>>(&self, source: P1, output_dir: P2) -> (PathBuf, PathBuf) {
        (
            FileManager::mirrored_output_path(&source, &output_dir, &self.tagged_extension),
            FileManager::mirrored_output_path(&source, &output_dir, &self.manifest_extension),
        )
    }

    /// Scan text without touching the filesystem
    pub fn extract_str(&self, text: &str) -> Extraction {
        self.scanner.scan_document(text)
    }

    /// Extract one source file into `output_dir`
    pub fn extract<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        source: P1,
        output_dir: P2,
    ) -> Result<ExtractionReport, ExtractError> {
        let source = source.as_ref();
        info!("Extracting from {}...", source.display());

        let bytes = fs::read(source).map_err(|e| ExtractError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ExtractError::Encoding {
            path: source.to_path_buf(),
        })?;

        let extraction = self.extract_str(&text);
        let (tagged_path, manifest_path) = self.output_paths(source, output_dir);

        write_output(&tagged_path, &extraction.skeleton)?;
        write_output(&manifest_path, &extraction.manifest)?;

        let report = ExtractionReport {
            source: source.to_path_buf(),
            tagged_path,
            manifest_path,
            runs: extraction.runs.len(),
            dangling: extraction.dangling().count(),
        };
        debug!(
            "{} runs extracted to {:?} and {:?}",
            report.runs, report.tagged_path, report.manifest_path
        );
        info!("Done.");

        Ok(report)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(RunScanner::default())
    }
}

fn write_output(path: &Path, content: &str) -> Result<(), ExtractError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ExtractError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, content).map_err(|e| ExtractError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
