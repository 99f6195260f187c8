//! PNG decoding through the `image` crate

use super::{DecodedImage, TextureDecoder};
use crate::error::{AtlasError, AtlasResult};
use image::{DynamicImage, ImageFormat};
use std::io::Read;

/// Accepts 8-bit PNGs with colour or alpha: RGBA as is, RGB and grey+alpha
/// widened to RGBA. Grey-only and 16-bit images are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngDecoder;

impl TextureDecoder for PngDecoder {
    fn decode(&self, reader: &mut dyn Read) -> AtlasResult<DecodedImage> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        match image::load_from_memory_with_format(&bytes, ImageFormat::Png)? {
            DynamicImage::ImageRgba8(buffer) => {
                let (width, height) = buffer.dimensions();
                DecodedImage::new(width, height, buffer.into_raw())
            }
            image @ (DynamicImage::ImageRgb8(_) | DynamicImage::ImageLumaA8(_)) => {
                let buffer = image.to_rgba8();
                let (width, height) = buffer.dimensions();
                DecodedImage::new(width, height, buffer.into_raw())
            }
            other => Err(AtlasError::UnsupportedFormat(format!("{:?}", other.color()))),
        }
    }
}
