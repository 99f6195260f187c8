//! Default atlas and asset constants
//!
//! These are the values `AtlasConfig::default()` is built from.

use static_assertions::const_assert;

/// Atlas page dimensions
pub mod page {
    pub const WIDTH: u32 = 1024;
    pub const HEIGHT: u32 = 1024;
    /// R, G, B, A
    pub const CHANNELS: u32 = 4;
}

/// Where block textures are looked up
pub mod assets {
    pub const NAMESPACE: &str = "minecraft";
    pub const PATH_PREFIX: &str = "textures/blocks/";
    pub const PATH_SUFFIX: &str = ".png";
}

/// Placeholder used for names that are not in the atlas
pub mod fallback {
    /// Reserved registry key of the placeholder texture
    pub const NAME: &str = "missing_texture";
    pub const SIZE: u32 = 2;
    pub const PRIMARY: [u8; 4] = [0, 0, 0, 255];
    pub const SECONDARY: [u8; 4] = [255, 0, 255, 255];
}

const_assert!(page::CHANNELS == 4);
const_assert!(fallback::SIZE > 0);
const_assert!(fallback::SIZE <= page::WIDTH && fallback::SIZE <= page::HEIGHT);
