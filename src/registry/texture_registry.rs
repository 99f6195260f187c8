//! Texture Registry
//!
//! Shared handle the renderer resolves texture names through. The published
//! state is a single `Arc<RegistrySnapshot>`: a rebuild assembles a complete
//! new snapshot off to the side and swaps it in under a short write lock.
//! Readers only hold the read lock long enough to clone the `Arc`, and keep
//! using whatever snapshot they got even while a newer one is published.
//!
//! Lookups before the first successful rebuild return `AtlasError::NotReady`
//! instead of blocking.

use super::registry_data::{RebuildReport, RegistrySnapshot, TextureInfo};
use super::registry_operations::{derive_texture_name, insert_fallback, lookup_texture};
use crate::assets::{AssetSource, DecodedImage, TextureDecoder};
use crate::atlas::{add_to_set, create_atlas_set_from_config};
use crate::config::AtlasConfig;
use crate::error::{AtlasError, AtlasResult};
use parking_lot::{Mutex, RwLock};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::Arc;

pub struct TextureRegistry {
    config: AtlasConfig,
    source: Arc<dyn AssetSource>,
    decoder: Arc<dyn TextureDecoder>,

    /// Currently published generation, `None` until the first rebuild
    active: RwLock<Option<Arc<RegistrySnapshot>>>,
    /// Held for the whole of a rebuild
    rebuild_lock: Mutex<()>,
}

impl TextureRegistry {
    /// Create an empty registry. Call `rebuild` before looking anything up.
    pub fn new(
        config: AtlasConfig,
        source: Arc<dyn AssetSource>,
        decoder: Arc<dyn TextureDecoder>,
    ) -> AtlasResult<Self> {
        config.validate()?;
        log::debug!(
            "[TextureRegistry::new] Registry for {}:{}*{} with {}x{} pages",
            config.namespace,
            config.path_prefix,
            config.path_suffix,
            config.page_width,
            config.page_height
        );
        Ok(Self {
            config,
            source,
            decoder,
            active: RwLock::new(None),
            rebuild_lock: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    /// Current snapshot, for resolving many names against one generation
    pub fn snapshot(&self) -> Option<Arc<RegistrySnapshot>> {
        self.active.read().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.active.read().is_some()
    }

    /// Published generation, 0 before the first rebuild
    pub fn generation(&self) -> u64 {
        self.active
            .read()
            .as_ref()
            .map_or(0, |snapshot| snapshot.generation)
    }

    /// Resolve a texture name, returning `missing_texture` for unknown names
    pub fn lookup(&self, name: &str) -> AtlasResult<TextureInfo> {
        let snapshot = self.snapshot().ok_or(AtlasError::NotReady)?;
        Ok(lookup_texture(&snapshot, name))
    }

    /// Reload every matching asset and publish a new generation
    ///
    /// On error the previously published snapshot stays in place.
    pub fn rebuild(&self) -> AtlasResult<RebuildReport> {
        let _guard = self.rebuild_lock.lock();
        let previous = self.generation();
        let generation = previous + 1;

        log::info!(
            "[TextureRegistry::rebuild] Starting rebuild of generation {}",
            generation
        );

        let (snapshot, skipped) = match self.build_snapshot(generation) {
            Ok(built) => built,
            Err(e) => {
                log::error!(
                    "[TextureRegistry::rebuild] Rebuild failed, keeping generation {}: {}",
                    previous,
                    e
                );
                return Err(e);
            }
        };

        let report = RebuildReport {
            generation,
            textures: snapshot.textures.len(),
            pages: snapshot.atlases.pages.len(),
            skipped,
        };

        *self.active.write() = Some(Arc::new(snapshot));

        log::info!(
            "[TextureRegistry::rebuild] Published generation {}: {} textures on {} pages ({} skipped)",
            report.generation,
            report.textures,
            report.pages,
            report.skipped.len()
        );
        Ok(report)
    }

    /// Decode and pack into a private snapshot; nothing here is visible to readers
    fn build_snapshot(&self, generation: u64) -> AtlasResult<(RegistrySnapshot, Vec<String>)> {
        let config = &self.config;
        let paths = self
            .source
            .search(&config.namespace, &config.path_prefix, &config.path_suffix)
            .map_err(|e| AtlasError::during_rebuild(config.path_prefix.as_str(), e))?;

        log::debug!(
            "[TextureRegistry::build_snapshot] Decoding {} assets",
            paths.len()
        );

        // Decode in parallel, pack sequentially in search order
        let source = self.source.as_ref();
        let decoder = self.decoder.as_ref();
        let decoded: Vec<AtlasResult<DecodedImage>> = paths
            .par_iter()
            .map(|path| load_image(source, decoder, &config.namespace, path))
            .collect();

        let mut atlases = create_atlas_set_from_config(config);
        let mut textures = FxHashMap::default();
        let mut skipped = Vec::new();

        for (path, image) in paths.iter().zip(decoded) {
            let image = image.map_err(|e| AtlasError::during_rebuild(path.as_str(), e))?;

            if !image.is_square() {
                log::warn!(
                    "[TextureRegistry::build_snapshot] Skipping {} ({}x{}): only square textures are supported",
                    path,
                    image.width,
                    image.height
                );
                skipped.push(path.clone());
                continue;
            }

            let name = derive_texture_name(path, &config.path_prefix, &config.path_suffix);
            let (atlas, rect) = add_to_set(&mut atlases, &image.pixels, image.width, image.height)
                .map_err(|e| AtlasError::during_rebuild(path.as_str(), e))?;
            textures.insert(name.to_string(), TextureInfo { atlas, rect });
        }

        let fallback = insert_fallback(&mut atlases, &mut textures, &config.fallback)
            .map_err(|e| AtlasError::during_rebuild(crate::constants::fallback::NAME, e))?;

        let snapshot = RegistrySnapshot {
            generation,
            atlases,
            textures,
            fallback,
        };
        Ok((snapshot, skipped))
    }
}

fn load_image(
    source: &dyn AssetSource,
    decoder: &dyn TextureDecoder,
    namespace: &str,
    path: &str,
) -> AtlasResult<DecodedImage> {
    let mut reader = source.open(namespace, path)?;
    decoder.decode(&mut reader)
}
