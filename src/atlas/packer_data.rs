//! Shelf Packer Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in packer_operations.rs

use serde::{Deserialize, Serialize};

/// Rectangle in page-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtlasRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Shelf packing state for one page
///
/// Items are laid out left to right on the current shelf. When an item does
/// not fit, a new shelf opens below the tallest item of the current one.
/// Earlier shelves are never revisited.
#[derive(Debug, Clone)]
pub struct ShelfPackerData {
    pub page_width: u32,
    pub page_height: u32,

    // Current shelf
    pub shelf_y: u32,
    pub shelf_height: u32,
    pub cursor_x: u32,

    // Stats
    pub used_area: u64,
    pub placed_count: usize,
}
