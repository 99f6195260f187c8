// Hearth Atlas - texture atlas packing and texture registry
//
// Source images are packed into fixed-size RGBA pages with a shelf packer and
// indexed by name. The registry is rebuilt wholesale on asset reload and
// swapped in atomically, so render threads can keep resolving names while a
// reload is in progress.
//
// Layout follows the data/operations split:
// - *_data modules hold plain data structures
// - *_operations modules hold the functions that transform them
// - TextureRegistry is the shared, thread-safe handle handed to the renderer

pub mod assets;
pub mod atlas;
pub mod config;
pub mod constants;
pub mod error;
pub mod registry;

pub use assets::{
    AssetSource, DecodedImage, DirectoryAssetSource, MemoryAssetSource, PngDecoder,
    TextureDecoder,
};
pub use atlas::{AtlasPageData, AtlasRect, AtlasSetData, ShelfPackerData};
pub use config::{AtlasConfig, FallbackConfig};
pub use error::{AtlasError, AtlasResult};
pub use registry::{AtlasUV, RebuildReport, RegistrySnapshot, TextureInfo, TextureRegistry};
