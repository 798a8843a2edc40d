//! PDF header detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::handler::handle_file_error;

/// PDF format information read from the file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const MAX_VERSION_LEN: usize = 8;
const HEADER_LEN: u64 = 16;

/// Detect PDF format from a file path.
///
/// Filesystem failures go through [`handle_file_error`]; a readable file
/// without a PDF header yields [`Error::UnknownFormat`], and one whose header
/// carries a malformed version yields [`Error::UnsupportedVersion`].
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| handle_file_error(e, path))?;

    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    file.take(HEADER_LEN)
        .read_to_end(&mut header)
        .map_err(|e| handle_file_error(e, path))?;

    require_format(&header, path)
}

/// Detect PDF format from the first bytes of a document.
///
/// Returns `Ok(None)` when the data does not start with `%PDF-`, and
/// [`Error::UnsupportedVersion`] when it does but the version is not of the
/// form `digit.digit`.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<Option<PdfFormat>> {
    if !data.starts_with(PDF_MAGIC) {
        return Ok(None);
    }

    let version_bytes: Vec<u8> = data[PDF_MAGIC_LEN..]
        .iter()
        .take_while(|b| !b.is_ascii_whitespace() && **b != b'%')
        .take(MAX_VERSION_LEN)
        .copied()
        .collect();
    let version = String::from_utf8_lossy(&version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }
    Ok(Some(PdfFormat { version }))
}

/// Detect the format of `data` read from `path`, logging any rejection.
pub(crate) fn require_format(data: &[u8], path: &Path) -> Result<PdfFormat> {
    match detect_format_from_bytes(data) {
        Ok(Some(format)) => Ok(format),
        Ok(None) => {
            log::error!("{} does not start with a PDF header", path.display());
            Err(Error::UnknownFormat {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            log::error!("{}: {}", path.display(), e);
            Err(e)
        }
    }
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == VERSION_LEN
        && bytes[0].is_ascii_digit()
        && bytes[1] == b'.'
        && bytes[2].is_ascii_digit()
}
