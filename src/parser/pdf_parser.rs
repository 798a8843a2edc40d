//! PDF document reader using lopdf.

use std::io;
use std::path::{Path, PathBuf};

use lopdf::{Document as LopdfDocument, Object};

use crate::detect::{detect_format_from_path, require_format, PdfFormat};
use crate::error::Result;
use crate::handler::handle_file_error;
use crate::model::{DocumentFile, Metadata, Page};

/// Path recorded for documents read from memory.
pub const MEMORY_PATH: &str = "<memory>";

/// An opened PDF document.
pub struct PdfParser {
    doc: LopdfDocument,
    path: PathBuf,
    format: PdfFormat,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.is_dir() {
            let err = io::Error::new(io::ErrorKind::IsADirectory, "expected a PDF file");
            return Err(handle_file_error(err, path));
        }

        // Verify it's a PDF
        let format = detect_format_from_path(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| handle_file_error(e, path))?;
        log::debug!("opened {} ({})", path.display(), format);

        Ok(Self {
            doc,
            path: path.to_path_buf(),
            format,
        })
    }

    /// Open a PDF held in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let path = Path::new(MEMORY_PATH);

        let format = require_format(data, path)?;

        let doc = LopdfDocument::load_mem(data).map_err(|e| handle_file_error(e, path))?;

        Ok(Self {
            doc,
            path: path.to_path_buf(),
            format,
        })
    }

    /// Read metadata and page handles into a [`DocumentFile`].
    pub fn into_document(self) -> DocumentFile {
        let metadata = self.extract_metadata();
        let pages = self.extract_pages();

        log::debug!("read {} pages from {}", pages.len(), self.path.display());
        if metadata.is_empty() {
            log::debug!("{} has no document information", self.path.display());
        }

        DocumentFile {
            encrypted: self.doc.is_encrypted(),
            version: self.format.version,
            path: self.path,
            metadata,
            pages,
        }
    }

    /// Read the trailer's `Info` dictionary.
    fn extract_metadata(&self) -> Metadata {
        let info = match self.doc.trailer.get(b"Info") {
            Ok(Object::Reference(id)) => self.doc.get_dictionary(*id).ok(),
            Ok(Object::Dictionary(dict)) => Some(dict),
            _ => None,
        };

        let Some(info) = info else {
            return Metadata::new();
        };

        info.iter()
            .filter_map(|(key, value)| {
                let value = self.object_to_string(value)?;
                if value.is_empty() {
                    return None;
                }
                Some((String::from_utf8_lossy(key).to_string(), value))
            })
            .collect()
    }

    /// Collect every page in document order.
    fn extract_pages(&self) -> Vec<Page> {
        self.doc
            .get_pages()
            .into_iter()
            .map(|(number, id)| {
                let (width, height) = self.get_page_dimensions(id);
                Page::new(number, id, width, height)
            })
            .collect()
    }

    /// Get page dimensions from the MediaBox, defaulting to Letter size.
    fn get_page_dimensions(&self, page_id: lopdf::ObjectId) -> (f32, f32) {
        if let Ok(page_dict) = self.doc.get_dictionary(page_id) {
            if let Ok(Object::Array(array)) = page_dict.get(b"MediaBox") {
                if array.len() >= 4 {
                    let width = array[2].as_float().unwrap_or(612.0);
                    let height = array[3].as_float().unwrap_or(792.0);
                    return (width, height);
                }
            }
        }

        (612.0, 792.0)
    }

    fn object_to_string(&self, obj: &Object) -> Option<String> {
        match obj {
            Object::Reference(id) => self
                .doc
                .get_object(*id)
                .ok()
                .and_then(|o| self.object_to_string(o)),
            Object::String(bytes, _) => Some(decode_text_string(bytes)),
            Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
            Object::Integer(i) => Some(i.to_string()),
            Object::Real(r) => Some(r.to_string()),
            Object::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Decode a PDF text string (UTF-16BE with BOM, otherwise UTF-8 or Latin-1).
fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
