//! Error types for hoa-property.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hoa-property operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving and loading documents.
#[derive(Error, Debug)]
pub enum Error {
    /// The target path does not exist.
    #[error("{} does not exist: {source}", .path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The path exists but is neither a matching document nor a directory.
    #[error("{} is neither a directory nor a .{extension} file", .path.display())]
    InvalidInput {
        /// Path that was requested
        path: PathBuf,
        /// Extension the resolver was looking for
        extension: String,
    },

    /// The operating system denied access.
    #[error("permission denied for {}: {source}", .path.display())]
    PermissionDenied {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A file was required but a directory was found.
    #[error("{} is a directory, not a file", .path.display())]
    IsADirectory {
        /// Path that was requested
        path: PathBuf,
    },

    /// Any other I/O fault.
    #[error("I/O error while accessing {}: {source}", .path.display())]
    Io {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The PDF library rejected the document.
    #[error("PDF error in {}: {source}", .path.display())]
    Pdf {
        /// Path that was requested
        path: PathBuf,
        /// Underlying lopdf error
        source: lopdf::Error,
    },

    /// The file does not start with a PDF header.
    #[error("{} is not a valid PDF", .path.display())]
    UnknownFormat {
        /// Path that was requested
        path: PathBuf,
    },

    /// The file has a PDF header but its version is not `digit.digit`.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The settings file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse category of an [`Error`], as reported by the file error handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Target path does not exist
    NotFound,
    /// Path matches neither expected shape
    InvalidInput,
    /// Access denied by the OS
    PermissionDenied,
    /// Directory found where a file was expected
    IsADirectory,
    /// Any other I/O fault
    Io,
    /// Anything else
    Unclassified,
}

impl Error {
    /// Get the category of this error.
    pub fn category(&self) -> Category {
        match self {
            Error::NotFound { .. } => Category::NotFound,
            Error::InvalidInput { .. } => Category::InvalidInput,
            Error::PermissionDenied { .. } => Category::PermissionDenied,
            Error::IsADirectory { .. } => Category::IsADirectory,
            Error::Io { .. } => Category::Io,
            Error::Pdf { .. }
            | Error::UnknownFormat { .. }
            | Error::UnsupportedVersion(_)
            | Error::Config(_) => Category::Unclassified,
        }
    }
}

impl From<dotenvy::Error> for Error {
    fn from(err: dotenvy::Error) -> Self {
        Error::Config(err.to_string())
    }
}
