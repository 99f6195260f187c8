//! Texture Registry Operations - Pure DOP Functions
//!
//! Building blocks for a rebuild plus read-only queries on a published
//! snapshot.

use super::registry_data::{AtlasUV, RegistrySnapshot, TextureInfo};
use crate::atlas::{add_to_set, AtlasSetData};
use crate::config::FallbackConfig;
use crate::constants;
use crate::error::AtlasResult;
use cgmath::Vector2;
use rustc_hash::FxHashMap;

/// Strip the search prefix and suffix from an asset path
///
/// `textures/blocks/stone.png` becomes `stone`. Paths that do not carry the
/// prefix and suffix are returned unchanged.
pub fn derive_texture_name<'a>(path: &'a str, prefix: &str, suffix: &str) -> &'a str {
    path.strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(suffix))
        .unwrap_or(path)
}

/// Build the RGBA pixels of the placeholder checkerboard
pub fn build_fallback_pixels(config: &FallbackConfig) -> Vec<u8> {
    let size = config.size;
    let texels: Vec<[u8; 4]> = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .map(|(x, y)| {
            if (x + y) % 2 == 0 {
                config.primary
            } else {
                config.secondary
            }
        })
        .collect();
    bytemuck::cast_slice::<[u8; 4], u8>(&texels).to_vec()
}

/// Pack the placeholder and register it under `missing_texture`
///
/// Overwrites any asset that happened to use the reserved name.
pub fn insert_fallback(
    atlases: &mut AtlasSetData,
    textures: &mut FxHashMap<String, TextureInfo>,
    config: &FallbackConfig,
) -> AtlasResult<TextureInfo> {
    let pixels = build_fallback_pixels(config);
    let (atlas, rect) = add_to_set(atlases, &pixels, config.size, config.size)?;
    let info = TextureInfo { atlas, rect };

    if textures
        .insert(constants::fallback::NAME.to_string(), info)
        .is_some()
    {
        log::warn!(
            "[registry_operations::insert_fallback] Asset named '{}' replaced by the built-in placeholder",
            constants::fallback::NAME
        );
    }
    Ok(info)
}

/// Resolve a name, falling back to `missing_texture`
pub fn lookup_texture(snapshot: &RegistrySnapshot, name: &str) -> TextureInfo {
    snapshot
        .textures
        .get(name)
        .copied()
        .unwrap_or(snapshot.fallback)
}

/// Resolve a name without falling back
pub fn get_texture(snapshot: &RegistrySnapshot, name: &str) -> Option<TextureInfo> {
    snapshot.textures.get(name).copied()
}

pub fn contains_texture(snapshot: &RegistrySnapshot, name: &str) -> bool {
    snapshot.textures.contains_key(name)
}

/// Number of registered names, including the fallback
pub fn texture_count(snapshot: &RegistrySnapshot) -> usize {
    snapshot.textures.len()
}

/// Iterate over all registered names
pub fn texture_names(snapshot: &RegistrySnapshot) -> impl Iterator<Item = &str> {
    snapshot.textures.keys().map(String::as_str)
}

pub fn snapshot_generation(snapshot: &RegistrySnapshot) -> u64 {
    snapshot.generation
}

/// Pages of the snapshot, indexed by `TextureInfo::atlas`
pub fn snapshot_atlases(snapshot: &RegistrySnapshot) -> &AtlasSetData {
    &snapshot.atlases
}

/// UV bounds of a texture on a `page_width` x `page_height` page
pub fn texture_uv(info: &TextureInfo, page_width: u32, page_height: u32) -> AtlasUV {
    let w = page_width as f32;
    let h = page_height as f32;
    AtlasUV {
        min: Vector2::new(info.rect.x as f32 / w, info.rect.y as f32 / h),
        max: Vector2::new(
            (info.rect.x + info.rect.width) as f32 / w,
            (info.rect.y + info.rect.height) as f32 / h,
        ),
    }
}

/// Transform local UV (0-1) to atlas UV
pub fn transform_uv(atlas_uv: &AtlasUV, local_uv: Vector2<f32>) -> Vector2<f32> {
    Vector2::new(
        atlas_uv.min.x + (atlas_uv.max.x - atlas_uv.min.x) * local_uv.x,
        atlas_uv.min.y + (atlas_uv.max.y - atlas_uv.min.y) * local_uv.y,
    )
}
