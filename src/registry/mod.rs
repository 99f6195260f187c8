//! Registry Module - texture name to atlas location

// Data modules
pub mod registry_data;

// Operations modules
pub mod registry_operations;

pub mod texture_registry;

pub use registry_data::{AtlasUV, RebuildReport, RegistrySnapshot, TextureInfo};
pub use registry_operations::{
    build_fallback_pixels, contains_texture, derive_texture_name, get_texture, insert_fallback,
    lookup_texture, snapshot_atlases, snapshot_generation, texture_count, texture_names,
    texture_uv, transform_uv,
};
pub use texture_registry::TextureRegistry;
