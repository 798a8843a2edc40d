//! Document-level types.

use super::Page;
use crate::error::Result;
use crate::parser::PdfParser;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One PDF document identified by a path, loaded eagerly.
///
/// Metadata and pages are read once, when the document is loaded. A
/// `DocumentFile` is never handed out half-built: if the file cannot be
/// opened, [`DocumentFile::load`] returns the error instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFile {
    /// Path the document was loaded from
    pub path: PathBuf,

    /// PDF version from the file header (e.g., "1.7")
    pub version: String,

    /// Whether the document is encrypted
    pub encrypted: bool,

    /// Document information dictionary; empty when the file has none
    pub metadata: Metadata,

    /// Page handles in document order
    pub pages: Vec<Page>,
}

impl DocumentFile {
    /// Open a PDF file and read its metadata and pages.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hoa_property::DocumentFile;
    ///
    /// let doc = DocumentFile::load("data/test/plats/Cap Rock 1 Recorded Plat.pdf")?;
    /// println!("{} pages", doc.page_count());
    /// # Ok::<(), hoa_property::Error>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(PdfParser::open(path)?.into_document())
    }

    /// Read a PDF held in memory.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        Ok(PdfParser::from_bytes(data)?.into_document())
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Check if the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// File name of the document, if the path has one.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Document information dictionary as a string mapping.
///
/// Keys are the PDF `Info` keys verbatim (`Title`, `Author`, `CreationDate`,
/// ...). Values that are not text are rendered to their literal form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Document title
    pub fn title(&self) -> Option<&str> {
        self.get("Title")
    }

    /// Document author
    pub fn author(&self) -> Option<&str> {
        self.get("Author")
    }

    /// Document subject
    pub fn subject(&self) -> Option<&str> {
        self.get("Subject")
    }

    /// Keywords
    pub fn keywords(&self) -> Option<&str> {
        self.get("Keywords")
    }

    /// Creator application
    pub fn creator(&self) -> Option<&str> {
        self.get("Creator")
    }

    /// PDF producer
    pub fn producer(&self) -> Option<&str> {
        self.get("Producer")
    }

    /// Creation date
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.get("CreationDate").and_then(parse_pdf_date)
    }

    /// Last modification date
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        self.get("ModDate").and_then(parse_pdf_date)
    }
}

impl FromIterator<(String, String)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
fn parse_pdf_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);

    // At minimum we need YYYY
    if s.len() < 4 {
        return None;
    }

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month: u32 = s.get(4..6).and_then(|m| m.parse().ok()).unwrap_or(1);
    let day: u32 = s.get(6..8).and_then(|d| d.parse().ok()).unwrap_or(1);
    let hour: u32 = s.get(8..10).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minute: u32 = s.get(10..12).and_then(|m| m.parse().ok()).unwrap_or(0);
    let second: u32 = s.get(12..14).and_then(|s| s.parse().ok()).unwrap_or(0);

    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}
