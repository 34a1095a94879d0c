/*!
 * Substitution engine.
 *
 * Replaces identifier tokens in a tagged skeleton with translated text.
 * Entries are applied one at a time in translation-file order, each as a
 * global literal replace over the document produced by the previous ones,
 * so a repeated identifier or a translation that itself contains a token is
 * layered onto whatever the document holds at that point.
 */

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::classifier::trim_ascii_space;
use crate::errors::InsertError;
use crate::extractor::TAG_EXT;
use crate::file_utils::FileManager;
use crate::translation_file::TranslationFile;

/// Regex for identifier tokens left in a document
static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<EXTRACTED\d+>").expect("Invalid identifier regex"));

/// Input and output paths of one insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertPaths {
    pub tagged: PathBuf,
    pub translation: PathBuf,
    pub output: PathBuf,
}

impl InsertPaths {
    /// Derive `base.<tagged_ext>` and `base.<lang>`, writing to `base`
    pub fn for_base<P: AsRef<Path>>(base: P, lang: &str, tagged_ext: &str) -> Self {
        let base = base.as_ref();
        Self {
            tagged: FileManager::with_suffix(base, tagged_ext),
            translation: FileManager::with_suffix(base, lang),
            output: base.to_path_buf(),
        }
    }

    /// Paths for a base file using the default tagged suffix
    pub fn for_base_default<P: AsRef<Path>>(base: P, lang: &str) -> Self {
        Self::for_base(base, lang, TAG_EXT)
    }
}

/// Result of applying a translation file to a skeleton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The translated document
    pub document: String,
    /// Entries whose tag occurred in the document when applied
    pub applied: usize,
    /// Tokens still present after every entry was applied, in order of first
    /// appearance
    pub unresolved: Vec<String>,
}

/// Outcome of inserting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertReport {
    pub output: PathBuf,
    pub entries: usize,
    pub applied: usize,
    pub unresolved: Vec<String>,
}

/// Applies translations to tagged skeletons
#[derive(Debug, Clone)]
pub struct Substituter {
    escape_single_quotes: bool,
}

impl Substituter {
    pub fn new(escape_single_quotes: bool) -> Self {
        Self {
            escape_single_quotes,
        }
    }

    /// Prepare translated text for insertion: trim it and escape `'`
    pub fn prepare(&self, text: &str) -> String {
        let text = trim_ascii_space(text);
        if self.escape_single_quotes {
            text.replace('\'', "\\'")
        } else {
            text.to_string()
        }
    }

    /// Apply every entry of `translations` to `skeleton`, in order
    pub fn apply(&self, skeleton: &str, translations: &TranslationFile) -> Substitution {
        let mut document = skeleton.to_string();
        let mut applied = 0;

        for entry in &translations.entries {
            if !document.contains(&entry.tag) {
                debug!("{} does not occur in the document", entry.tag);
                continue;
            }
            document = document.replace(&entry.tag, &self.prepare(&entry.text));
            applied += 1;
        }

        let mut unresolved: Vec<String> = Vec::new();
        for found in IDENTIFIER_REGEX.find_iter(&document) {
            if !unresolved.iter().any(|token| token == found.as_str()) {
                unresolved.push(found.as_str().to_string());
            }
        }

        Substitution {
            document,
            applied,
            unresolved,
        }
    }

    /// Insert translations from `translation` into `tagged`, writing `output`.
    /// Both inputs are read completely before the output is touched.
    pub fn insert<P1, P2, P3>(&self, tagged: P1, translation: P2, output: P3) -> Result<InsertReport, InsertError>
    where
        P1: AsRef<Path>,
        P2: AsRef<Path>,
        P3: AsRef<Path>,
    {
        let output = output.as_ref();
        info!("Inserting translation into {}...", output.display());

        let skeleton = read_input(tagged.as_ref())?;
        let translations = TranslationFile::parse(&read_input(translation.as_ref())?)?;

        let substitution = self.apply(&skeleton, &translations);
        for token in &substitution.unresolved {
            warn!("No translation for {} in {:?}", token, output);
        }

        fs::write(output, &substitution.document).map_err(|e| InsertError::Io {
            path: output.to_path_buf(),
            source: e,
        })?;
        info!("Done.");

        Ok(InsertReport {
            output: output.to_path_buf(),
            entries: translations.len(),
            applied: substitution.applied,
            unresolved: substitution.unresolved,
        })
    }

    /// Insert using the paths derived from a base file and language code
    pub fn insert_paths(&self, paths: &InsertPaths) -> Result<InsertReport, InsertError> {
        self.insert(&paths.tagged, &paths.translation, &paths.output)
    }
}

impl Default for Substituter {
    fn default() -> Self {
        Self::new(true)
    }
}

fn read_input(path: &Path) -> Result<String, InsertError> {
    let bytes = fs::read(path).map_err(|e| InsertError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    String::from_utf8(bytes).map_err(|_| InsertError::Encoding {
        path: path.to_path_buf(),
    })
}
