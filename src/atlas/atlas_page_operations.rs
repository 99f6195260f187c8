//! Atlas Page Operations - Pure DOP Functions
//!
//! Placement is delegated to the shelf packer; accepted pixels are copied
//! into the page buffer row by row.

use super::atlas_page_data::AtlasPageData;
use super::packer_data::AtlasRect;
use super::packer_operations::{create_shelf_packer, try_place, utilization};
use crate::error::{AtlasError, AtlasResult};
use image::RgbaImage;
use std::path::Path;

/// Create a new zeroed page
pub fn create_atlas_page(width: u32, height: u32, channels: u32) -> AtlasPageData {
    let size = width as usize * height as usize * channels as usize;
    AtlasPageData {
        width,
        height,
        channels,
        pixels: vec![0; size],
        packer: create_shelf_packer(width, height),
    }
}

/// Add an image to the page
///
/// `pixels` must hold exactly `width * height * channels` bytes. Returns
/// `AtlasError::PageFull` if the packer has no room left.
pub fn add_to_page(
    data: &mut AtlasPageData,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> AtlasResult<AtlasRect> {
    let channels = data.channels as usize;
    let expected = width as usize * height as usize * channels;
    if pixels.len() != expected {
        return Err(AtlasError::PixelDataMismatch {
            width,
            height,
            expected,
            found: pixels.len(),
        });
    }

    let rect = try_place(&mut data.packer, width, height)
        .ok_or(AtlasError::PageFull { width, height })?;

    let page_stride = data.width as usize * channels;
    let src_stride = width as usize * channels;
    let x_offset = rect.x as usize * channels;
    for (row, src) in pixels.chunks_exact(src_stride).enumerate() {
        let start = (rect.y as usize + row) * page_stride + x_offset;
        data.pixels[start..start + src_stride].copy_from_slice(src);
    }

    Ok(rect)
}

/// Get page utilization percentage
pub fn page_utilization(data: &AtlasPageData) -> f32 {
    utilization(&data.packer)
}

/// Copy the page into an `RgbaImage`
pub fn page_to_image(data: &AtlasPageData) -> Option<RgbaImage> {
    RgbaImage::from_raw(data.width, data.height, data.pixels.clone())
}

/// Save page to file for debugging
pub fn save_page_debug(data: &AtlasPageData, path: impl AsRef<Path>) -> AtlasResult<()> {
    let image = page_to_image(data).ok_or_else(|| {
        AtlasError::UnsupportedFormat(format!("{}-channel page", data.channels))
    })?;
    image.save(path)?;
    Ok(())
}
