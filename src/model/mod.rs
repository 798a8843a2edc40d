//! Document model types.
//!
//! A [`DocumentFile`] is the loaded form of one PDF: its path, header
//! version, information dictionary and page handles.

mod document;
mod page;

pub use document::{DocumentFile, Metadata};
pub use page::Page;
