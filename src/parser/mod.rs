//! PDF reading module.

mod pdf_parser;

pub use pdf_parser::{PdfParser, MEMORY_PATH};
