//! Pack a directory of block textures and dump the pages as PNG
//!
//! Usage: cargo run --example pack_directory -- <assets_root> [out_dir] [config.toml]

use anyhow::Context;
use hearth_atlas::atlas::save_page_debug;
use hearth_atlas::registry::{snapshot_atlases, texture_uv};
use hearth_atlas::{AtlasConfig, DirectoryAssetSource, PngDecoder, TextureRegistry};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let root = PathBuf::from(args.next().unwrap_or_else(|| "assets".to_string()));
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "atlas_out".to_string()));
    let config = match args.next() {
        Some(path) => AtlasConfig::load(path)?,
        None => AtlasConfig::default(),
    };

    let registry = TextureRegistry::new(
        config,
        Arc::new(DirectoryAssetSource::new(&root)),
        Arc::new(PngDecoder),
    )?;

    let report = registry
        .rebuild()
        .with_context(|| format!("packing textures from {}", root.display()))?;
    log::info!(
        "Packed {} textures into {} pages ({} skipped)",
        report.textures,
        report.pages,
        report.skipped.len()
    );
    for path in &report.skipped {
        log::info!("  skipped {}", path);
    }

    let config = registry.config();
    let missing = registry.lookup("missing_texture")?;
    let uv = texture_uv(&missing, config.page_width, config.page_height);
    log::info!(
        "missing_texture -> page {} {:?} uv {:?}..{:?}",
        missing.atlas,
        missing.rect,
        uv.min,
        uv.max
    );

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let snapshot = registry
        .snapshot()
        .context("registry has no published snapshot")?;
    for (index, page) in snapshot_atlases(&snapshot).pages.iter().enumerate() {
        let path = out_dir.join(format!("page_{}.png", index));
        save_page_debug(page, &path)?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
