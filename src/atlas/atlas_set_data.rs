//! Atlas Set Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in atlas_set_operations.rs

use super::atlas_page_data::AtlasPageData;

/// Ordered list of pages; a page's index is its atlas id
#[derive(Debug, Clone)]
pub struct AtlasSetData {
    pub page_width: u32,
    pub page_height: u32,
    pub channels: u32,

    /// Append-only
    pub pages: Vec<AtlasPageData>,
}
