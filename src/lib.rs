//! # hoa-property
//!
//! Finds the PDF documents of a homeowners association (plats, recorded
//! covenants, minutes) and opens them to capture their metadata and pages.
//!
//! ## Quick Start
//!
//! ```no_run
//! use hoa_property::{resolve, Settings};
//!
//! fn main() -> hoa_property::Result<()> {
//!     let settings = Settings::load(hoa_property::config::DEFAULT_ENV_FILE)?;
//!     println!("{}", settings.property_name);
//!
//!     // A single file or a directory of PDFs
//!     for doc in resolve("data/test/plats")? {
//!         println!("{}: {:?}", doc.path.display(), doc.metadata.title());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Every filesystem or PDF failure is logged through the `log` facade by
//! [`handler::handle_file_error`] and returned as a typed [`Error`]; nothing
//! is swallowed.

pub mod config;
pub mod detect;
pub mod error;
pub mod handler;
pub mod model;
pub mod parser;
pub mod resolve;

// Re-export commonly used types
pub use config::Settings;
pub use detect::{detect_format_from_bytes, detect_format_from_path, PdfFormat};
pub use error::{Category, Error, Result};
pub use handler::handle_file_error;
pub use model::{DocumentFile, Metadata, Page};
pub use parser::PdfParser;
pub use resolve::{PathResolver, Resolved};

use std::path::Path;

/// Resolve a PDF file or a directory of PDFs into loaded documents.
///
/// # Example
///
/// ```no_run
/// use hoa_property::resolve;
///
/// let docs = resolve("data/test/plats/Cap Rock 1 Recorded Plat.pdf").unwrap();
/// assert_eq!(docs.len(), 1);
/// ```
pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Vec<DocumentFile>> {
    PathResolver::new().resolve(path)
}

/// Load a single PDF file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<DocumentFile> {
    DocumentFile::load(path)
}
