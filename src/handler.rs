//! Classification and reporting of file errors.
//!
//! Every I/O or PDF-library failure met while resolving or loading a
//! document passes through [`handle_file_error`], which logs one
//! category-specific line naming the path and turns the failure into a typed
//! [`Error`]. Nothing here recovers: the caller always gets an error back and
//! propagates it with `?`.

use std::io;
use std::path::Path;

use crate::error::Error;

/// A failure caught at the filesystem or PDF-library boundary.
#[derive(Debug)]
pub enum Cause {
    /// Error from the filesystem
    Io(io::Error),
    /// Error from lopdf that is not an I/O error
    Pdf(lopdf::Error),
}

impl From<io::Error> for Cause {
    fn from(err: io::Error) -> Self {
        Cause::Io(err)
    }
}

impl From<lopdf::Error> for Cause {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Cause::Io(e),
            other => Cause::Pdf(other),
        }
    }
}

/// Log a failure for `path` and return the matching typed error.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use hoa_property::handler::handle_file_error;
///
/// fn size(path: &Path) -> hoa_property::Result<u64> {
///     let meta = std::fs::metadata(path).map_err(|e| handle_file_error(e, path))?;
///     Ok(meta.len())
/// }
/// ```
pub fn handle_file_error(cause: impl Into<Cause>, path: &Path) -> Error {
    let path_buf = path.to_path_buf();

    match cause.into() {
        Cause::Io(e) => match e.kind() {
            io::ErrorKind::NotFound => {
                log::error!("file not found: {} does not exist: {}", path.display(), e);
                Error::NotFound {
                    path: path_buf,
                    source: e,
                }
            }
            io::ErrorKind::PermissionDenied => {
                log::error!("permission denied: cannot access {}: {}", path.display(), e);
                Error::PermissionDenied {
                    path: path_buf,
                    source: e,
                }
            }
            io::ErrorKind::IsADirectory => {
                log::error!("expected a file: {} is a directory: {}", path.display(), e);
                Error::IsADirectory { path: path_buf }
            }
            _ => {
                log::error!("I/O error while accessing {}: {}", path.display(), e);
                Error::Io {
                    path: path_buf,
                    source: e,
                }
            }
        },
        Cause::Pdf(e) => {
            log::error!("unexpected error while reading {}: {}", path.display(), e);
            Error::Pdf {
                path: path_buf,
                source: e,
            }
        }
    }
}
