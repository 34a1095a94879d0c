use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @generates: `path` with `.ext` appended to the full file name
    pub fn with_suffix<P: AsRef<Path>>(path: P, extension: &str) -> PathBuf {
        let mut name: OsString = path.as_ref().as_os_str().to_owned();
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    }

    // @generates: Output path under `output_dir` mirroring the source path
    // @params: source, output_dir, extension
    pub fn mirrored_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        source: P1,
        output_dir: P2,
        extension: &str,
    ) -> PathBuf {
        let relative: PathBuf = source
            .as_ref()
            .components()
            .filter(|component| matches!(component, Component::Normal(_)))
            .collect();

        Self::with_suffix(output_dir.as_ref().join(relative), extension)
    }

    /// Check whether a path's extension is one of `extensions`.
    /// Extensions may be given with or without the leading dot.
    pub fn has_extension<P: AsRef<Path>, S: AsRef<str>>(path: P, extensions: &[S]) -> bool {
        let Some(ext) = path.as_ref().extension() else {
            return false;
        };
        let ext = ext.to_string_lossy();
        extensions.iter().any(|wanted| {
            let wanted = wanted.as_ref();
            ext.eq_ignore_ascii_case(wanted.strip_prefix('.').unwrap_or(wanted))
        })
    }

    /// Find files with one of the given extensions in a directory tree.
    /// The result is sorted so traversal order is stable.
    pub fn find_files<P: AsRef<Path>, S: AsRef<str>>(dir: P, extensions: &[S]) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && Self::has_extension(path, extensions) {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
