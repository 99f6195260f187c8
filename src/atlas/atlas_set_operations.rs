//! Atlas Set Operations - Pure DOP Functions
//!
//! First-fit over existing pages in creation order; a new page is only
//! allocated when every existing page rejects the image.

use super::atlas_page_data::AtlasPageData;
use super::atlas_page_operations::{add_to_page, create_atlas_page};
use super::atlas_set_data::AtlasSetData;
use super::packer_data::AtlasRect;
use crate::config::AtlasConfig;
use crate::error::{AtlasError, AtlasResult};

/// Create an empty atlas set
pub fn create_atlas_set(page_width: u32, page_height: u32, channels: u32) -> AtlasSetData {
    AtlasSetData {
        page_width,
        page_height,
        channels,
        pages: Vec::new(),
    }
}

/// Create an empty atlas set with the page geometry from `config`
pub fn create_atlas_set_from_config(config: &AtlasConfig) -> AtlasSetData {
    create_atlas_set(config.page_width, config.page_height, config.channels)
}

/// Add an image, returning the page index and its rectangle on that page
pub fn add_to_set(
    data: &mut AtlasSetData,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> AtlasResult<(usize, AtlasRect)> {
    for (index, page) in data.pages.iter_mut().enumerate() {
        match add_to_page(page, pixels, width, height) {
            Ok(rect) => return Ok((index, rect)),
            Err(AtlasError::PageFull { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    let mut page = create_atlas_page(data.page_width, data.page_height, data.channels);
    let rect = match add_to_page(&mut page, pixels, width, height) {
        Ok(rect) => rect,
        Err(AtlasError::PageFull { .. }) => {
            return Err(AtlasError::PlacementFailed {
                width,
                height,
                page_width: data.page_width,
                page_height: data.page_height,
            })
        }
        Err(e) => return Err(e),
    };

    data.pages.push(page);
    let index = data.pages.len() - 1;
    log::debug!(
        "[atlas_set_operations::add_to_set] Created atlas page {} ({}x{}) for {}x{}",
        index,
        data.page_width,
        data.page_height,
        width,
        height
    );
    Ok((index, rect))
}

/// Number of pages allocated so far
pub fn page_count(data: &AtlasSetData) -> usize {
    data.pages.len()
}

/// Get a page by atlas id
pub fn page(data: &AtlasSetData, index: usize) -> Option<&AtlasPageData> {
    data.pages.get(index)
}
