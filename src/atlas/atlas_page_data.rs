//! Atlas Page Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in atlas_page_operations.rs

use super::packer_data::ShelfPackerData;

/// One fixed-size RGBA texture page
///
/// `pixels` is row-major with a stride of `width * channels` bytes and starts
/// out fully transparent.
#[derive(Debug, Clone)]
pub struct AtlasPageData {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub pixels: Vec<u8>,

    // Packing state
    pub packer: ShelfPackerData,
}
