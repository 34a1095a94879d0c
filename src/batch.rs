/*!
 * Batch driver.
 *
 * Walks a directory tree and runs extraction or insertion on every matching
 * file, strictly one file after another. File lists are collected up front
 * so files written during the batch are never picked up by the same walk.
 * A failing file is reported and the batch moves on to the next one.
 */

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::{AppError, BatchError};
use crate::extractor::Extractor;
use crate::file_utils::FileManager;
use crate::substitution::{InsertPaths, Substituter};

/// A file the batch could not process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Summary of a batch run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchReport {
    /// Files processed successfully, in processing order
    pub processed: Vec<PathBuf>,
    /// Files that failed or were skipped
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(&mut self, path: &Path, reason: impl ToString) {
        let reason = reason.to_string();
        error!("{}: {}", path.display(), reason);
        self.failures.push(BatchFailure {
            path: path.to_path_buf(),
            reason,
        });
    }
}

/// All files under `root` whose extension is one of `extensions`
pub fn collect_source_files<P: AsRef<Path>, S: AsRef<str>>(root: P, extensions: &[S]) -> Result<Vec<PathBuf>> {
    FileManager::find_files(root.as_ref(), extensions)
        .with_context(|| format!("Failed to walk directory: {:?}", root.as_ref()))
}

/// Every `*.lang` file under `root` paired with its sibling tagged file.
/// Translation files without a tagged file come back as `MissingPair`.
pub fn collect_translation_pairs<P: AsRef<Path>>(
    root: P,
    lang: &str,
    tagged_ext: &str,
) -> Result<Vec<Result<InsertPaths, BatchError>>> {
    let suffix = format!(".{}", lang);
    let mut translations = Vec::new();

    for entry in WalkDir::new(root.as_ref()).follow_links(true) {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.len() > suffix.len() && name.ends_with(&suffix) {
            translations.push(path.to_path_buf());
        }
    }
    translations.sort();

    Ok(translations
        .into_iter()
        .map(|translation| {
            let name = translation
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let base_name = &name[..name.len() - suffix.len()];
            let paths = InsertPaths::for_base(translation.with_file_name(base_name), lang, tagged_ext);
            if FileManager::file_exists(&paths.tagged) {
                Ok(paths)
            } else {
                Err(BatchError::MissingPair {
                    translation,
                    tagged: paths.tagged,
                })
            }
        })
        .collect())
}

fn progress_bar(len: usize, enabled: bool, message: &'static str) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style.progress_chars("█▓▒░"));
    bar.set_message(message);
    bar
}

/// Extract every matching file under `input_dir` into `output_dir`
pub fn extract_tree<P1: AsRef<Path>, P2: AsRef<Path>, S: AsRef<str>>(
    extractor: &Extractor,
    input_dir: P1,
    output_dir: P2,
    extensions: &[S],
    show_progress: bool,
) -> Result<BatchReport> {
    let files = collect_source_files(&input_dir, extensions)?;
    info!("Found {} files to extract under {:?}", files.len(), input_dir.as_ref());

    let bar = progress_bar(files.len(), show_progress, "Extracting");
    let mut report = BatchReport::default();
    for file in files {
        match extractor.extract(&file, &output_dir) {
            Ok(_) => report.processed.push(file),
            Err(e) => report.fail(&file, AppError::from(e)),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(report)
}

/// Insert `lang` translations into every tagged file under `dir`
pub fn insert_tree<P: AsRef<Path>>(
    substituter: &Substituter,
    dir: P,
    lang: &str,
    tagged_ext: &str,
    show_progress: bool,
) -> Result<BatchReport> {
    let pairs = collect_translation_pairs(&dir, lang, tagged_ext)?;
    info!("Found {} {} translation files under {:?}", pairs.len(), lang, dir.as_ref());

    let bar = progress_bar(pairs.len(), show_progress, "Inserting");
    let mut report = BatchReport::default();
    for pair in pairs {
        match pair {
            Ok(paths) => match substituter.insert_paths(&paths) {
                Ok(_) => report.processed.push(paths.output),
                Err(e) => report.fail(&paths.output, AppError::from(e)),
            },
            Err(missing) => {
                let path = match &missing {
                    BatchError::MissingPair { translation, .. } => translation.clone(),
                };
                report.fail(&path, AppError::from(missing));
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(report)
}
