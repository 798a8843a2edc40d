//! Resolving user-supplied paths into documents.
//!
//! A path is either a single document or a directory whose immediate
//! entries are scanned for documents. Matching is by extension, compared
//! case-insensitively, so `Plat.PDF` and `plat.pdf` are both picked up.
//! Directories are not walked recursively.
//!
//! # Example
//!
//! ```no_run
//! use hoa_property::PathResolver;
//!
//! let docs = PathResolver::new().resolve("data/test/plats")?;
//! for doc in &docs {
//!     println!("{}: {} pages", doc.path.display(), doc.page_count());
//! }
//! # Ok::<(), hoa_property::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::handler::handle_file_error;
use crate::model::DocumentFile;

/// Default document extension.
pub const DEFAULT_EXTENSION: &str = "pdf";

/// A validated path: one matching file, or a directory and its matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The path is itself a matching document.
    File(PathBuf),

    /// The path is a directory.
    Directory {
        /// The directory that was scanned
        root: PathBuf,
        /// Matching files, in directory-iteration order
        files: Vec<PathBuf>,
    },
}

impl Resolved {
    /// Matching document paths.
    ///
    /// Directory order comes from the platform and is not stable; callers
    /// should only rely on every match being present.
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Resolved::File(path) => std::slice::from_ref(path),
            Resolved::Directory { files, .. } => files,
        }
    }

    /// The path that was resolved.
    pub fn root(&self) -> &Path {
        match self {
            Resolved::File(path) => path,
            Resolved::Directory { root, .. } => root,
        }
    }

    /// Check if the path was a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Resolved::Directory { .. })
    }

    /// Number of matching documents.
    pub fn len(&self) -> usize {
        self.paths().len()
    }

    /// Check if no documents matched.
    pub fn is_empty(&self) -> bool {
        self.paths().is_empty()
    }
}

/// Finds documents of one type at a file or directory path.
#[derive(Debug, Clone)]
pub struct PathResolver {
    extension: String,
}

impl PathResolver {
    /// Create a resolver for PDF files.
    pub fn new() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Match a different extension (with or without the leading dot).
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = extension.as_ref().trim_start_matches('.').to_lowercase();
        self
    }

    /// The extension being matched, lowercase without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Check if a path carries the target extension.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.to_lowercase() == self.extension)
    }

    /// Classify `path` and list the matching files, without opening them.
    pub fn collect<P: AsRef<Path>>(&self, path: P) -> Result<Resolved> {
        let path = path.as_ref();
        log::debug!("resolving {}", path.display());

        let meta = fs::metadata(path).map_err(|e| handle_file_error(e, path))?;

        if meta.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(path).map_err(|e| handle_file_error(e, path))? {
                let entry = entry.map_err(|e| handle_file_error(e, path))?;
                let entry_path = entry.path();
                if !self.matches(&entry_path) {
                    continue;
                }

                // Follows symlinks; a dangling link is an error, not a skip
                let entry_meta =
                    fs::metadata(&entry_path).map_err(|e| handle_file_error(e, &entry_path))?;
                if entry_meta.is_file() {
                    files.push(entry_path);
                }
            }

            log::debug!(
                "checking path: {}, found {} .{} files",
                path.display(),
                files.len(),
                self.extension
            );
            return Ok(Resolved::Directory {
                root: path.to_path_buf(),
                files,
            });
        }

        if meta.is_file() && self.matches(path) {
            log::debug!("checking path: {}, found a single file", path.display());
            return Ok(Resolved::File(path.to_path_buf()));
        }

        log::error!(
            "The path {} is neither a directory nor a .{} file.",
            path.display(),
            self.extension
        );
        Err(Error::InvalidInput {
            path: path.to_path_buf(),
            extension: self.extension.clone(),
        })
    }

    /// Resolve `path` and load every matching document.
    ///
    /// The first document that fails to load aborts the whole call.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> Result<Vec<DocumentFile>> {
        let resolved = self.collect(path)?;
        self.load_all(&resolved, |_| {})
    }

    /// Load every document of an already collected path.
    ///
    /// `on_load` is called with each file just before it is opened, which
    /// lets callers report progress. The first failure aborts the call.
    pub fn load_all<F>(&self, resolved: &Resolved, mut on_load: F) -> Result<Vec<DocumentFile>>
    where
        F: FnMut(&Path),
    {
        let documents = resolved
            .paths()
            .iter()
            .map(|file| {
                on_load(file);
                DocumentFile::load(file)
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "resolved {} into {} documents",
            resolved.root().display(),
            documents.len()
        );
        Ok(documents)
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}
