//! Assets Module - where atlas source images come from
//!
//! The registry never touches the filesystem or an image codec directly. It
//! talks to an `AssetSource` to find and open files and to a
//! `TextureDecoder` to turn bytes into RGBA pixels.

pub mod directory_source;
pub mod memory_source;
pub mod png_decoder;

pub use directory_source::DirectoryAssetSource;
pub use memory_source::MemoryAssetSource;
pub use png_decoder::PngDecoder;

use crate::error::{AtlasError, AtlasResult};
use std::io::Read;

/// Enumerates and opens raw resource bytes
pub trait AssetSource: Send + Sync {
    /// All paths in `namespace` that start with `prefix` and end with
    /// `suffix`, in a stable order
    fn search(&self, namespace: &str, prefix: &str, suffix: &str) -> AtlasResult<Vec<String>>;

    /// Open one asset. Fails with `AtlasError::AssetNotFound` if it does not exist.
    fn open(&self, namespace: &str, path: &str) -> AtlasResult<Box<dyn Read + Send>>;
}

/// Turns an encoded image into RGBA8 pixels
pub trait TextureDecoder: Send + Sync {
    /// Fails with `AtlasError::Decode` for corrupt input and
    /// `AtlasError::UnsupportedFormat` for anything other than
    /// 8-bit interleaved RGBA
    fn decode(&self, reader: &mut dyn Read) -> AtlasResult<DecodedImage>;
}

/// Decoded RGBA8 image, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Bytes per pixel of every decoded image
    pub const CHANNELS: usize = 4;

    /// Wrap a pixel buffer, checking it matches the dimensions
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> AtlasResult<Self> {
        let expected = width as usize * height as usize * Self::CHANNELS;
        if pixels.len() != expected {
            return Err(AtlasError::PixelDataMismatch {
                width,
                height,
                expected,
                found: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_image_checks_length() {
        assert!(DecodedImage::new(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            DecodedImage::new(2, 3, vec![0; 16]),
            Err(AtlasError::PixelDataMismatch {
                expected: 24,
                found: 16,
                ..
            })
        ));
    }

    #[test]
    fn test_is_square() {
        let square = DecodedImage::new(16, 16, vec![0; 16 * 16 * 4]).expect("square");
        let banner = DecodedImage::new(16, 20, vec![0; 16 * 20 * 4]).expect("banner");
        assert!(square.is_square());
        assert!(!banner.is_square());
    }
}
