//! Texture Registry Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in registry_operations.rs

use crate::atlas::{AtlasRect, AtlasSetData};
use cgmath::Vector2;
use rustc_hash::FxHashMap;

/// Where a texture lives: atlas page index plus rectangle on that page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureInfo {
    pub atlas: usize,
    pub rect: AtlasRect,
}

/// Normalized UV bounds of a texture within its page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasUV {
    pub min: Vector2<f32>,
    pub max: Vector2<f32>,
}

/// One complete, immutable generation of the registry
///
/// Pages and mapping are published together so an entry can never point at
/// a page set from another generation.
pub struct RegistrySnapshot {
    pub(crate) generation: u64,
    pub(crate) atlases: AtlasSetData,
    pub(crate) textures: FxHashMap<String, TextureInfo>,
    /// Same value as the `missing_texture` entry
    pub(crate) fallback: TextureInfo,
}

impl std::fmt::Debug for RegistrySnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrySnapshot")
            .field("generation", &self.generation)
            .field("pages", &self.atlases.pages.len())
            .field("textures", &self.textures.len())
            .field("fallback", &self.fallback)
            .finish()
    }
}

/// Outcome of a successful rebuild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildReport {
    pub generation: u64,
    /// Entries in the new mapping, including the fallback
    pub textures: usize,
    pub pages: usize,
    /// Asset paths left out because they were not square
    pub skipped: Vec<String>,
}
