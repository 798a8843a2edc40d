//! Page handles.

use serde::{Deserialize, Serialize};

/// A handle to one page of a loaded document.
///
/// The handle is opaque: it records where the page lives in the PDF object
/// graph and its MediaBox size, nothing about its content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// PDF object id of the page dictionary (object number, generation)
    pub object_id: (u32, u16),

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,
}

impl Page {
    /// Create a new page handle with the given dimensions.
    pub fn new(number: u32, object_id: (u32, u16), width: f32, height: f32) -> Self {
        Self {
            number,
            object_id,
            width,
            height,
        }
    }

    /// Create a page handle with standard Letter size (8.5 x 11 inches).
    pub fn letter(number: u32, object_id: (u32, u16)) -> Self {
        Self::new(number, object_id, 612.0, 792.0) // 8.5 * 72, 11 * 72
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}
