//! Asset source backed by a directory tree
//!
//! Assets live at `<root>/<namespace>/<path>`, with `/` as the separator in
//! asset paths regardless of platform.

use super::AssetSource;
use crate::error::{AtlasError, AtlasResult};
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Component, Path, PathBuf};

pub struct DirectoryAssetSource {
    root: PathBuf,
}

impl DirectoryAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn namespace_dir(&self, namespace: &str) -> PathBuf {
        self.root.join(namespace)
    }

    /// Resolve an asset path, refusing anything that would leave the namespace
    fn resolve(&self, namespace: &str, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes || path.is_empty() {
            return None;
        }
        Some(self.namespace_dir(namespace).join(relative))
    }
}

fn walk(dir: &Path, relative: &str, out: &mut Vec<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            log::warn!(
                "[DirectoryAssetSource::search] Skipping non UTF-8 path in {}",
                dir.display()
            );
            continue;
        };
        let child = format!("{}{}", relative, name);
        if entry.file_type()?.is_dir() {
            walk(&entry.path(), &format!("{}/", child), out)?;
        } else {
            out.push(child);
        }
    }
    Ok(())
}

impl AssetSource for DirectoryAssetSource {
    fn search(&self, namespace: &str, prefix: &str, suffix: &str) -> AtlasResult<Vec<String>> {
        // Only walk the directory part of the prefix
        let start = match prefix.rfind('/') {
            Some(i) => &prefix[..=i],
            None => "",
        };
        let start_dir = if start.is_empty() {
            self.namespace_dir(namespace)
        } else {
            match self.resolve(namespace, start.trim_end_matches('/')) {
                Some(dir) => dir,
                None => return Ok(Vec::new()),
            }
        };

        if !start_dir.is_dir() {
            log::debug!(
                "[DirectoryAssetSource::search] {} does not exist",
                start_dir.display()
            );
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        walk(&start_dir, start, &mut found)?;
        found.retain(|path| path.starts_with(prefix) && path.ends_with(suffix));
        found.sort();

        log::debug!(
            "[DirectoryAssetSource::search] {} matches for {}:{}*{}",
            found.len(),
            namespace,
            prefix,
            suffix
        );
        Ok(found)
    }

    fn open(&self, namespace: &str, path: &str) -> AtlasResult<Box<dyn Read + Send>> {
        let not_found = || AtlasError::AssetNotFound {
            namespace: namespace.to_string(),
            path: path.to_string(),
        };
        let full_path = self.resolve(namespace, path).ok_or_else(not_found)?;

        match File::open(&full_path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(not_found()),
            Err(e) => Err(AtlasError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let blocks = temp_dir.path().join("minecraft/textures/blocks");
        fs::create_dir_all(blocks.join("ores")).expect("Failed to create dirs");
        fs::create_dir_all(temp_dir.path().join("minecraft/textures/items"))
            .expect("Failed to create dirs");

        fs::write(blocks.join("stone.png"), b"stone").expect("write");
        fs::write(blocks.join("dirt.png"), b"dirt").expect("write");
        fs::write(blocks.join("dirt.png.mcmeta"), b"{}").expect("write");
        fs::write(blocks.join("ores/iron.png"), b"iron").expect("write");
        fs::write(
            temp_dir.path().join("minecraft/textures/items/stick.png"),
            b"stick",
        )
        .expect("write");
        temp_dir
    }

    #[test]
    fn test_search_filters_and_sorts() {
        let temp_dir = create_test_tree();
        let source = DirectoryAssetSource::new(temp_dir.path());

        let found = source
            .search("minecraft", "textures/blocks/", ".png")
            .expect("search");
        assert_eq!(
            found,
            vec![
                "textures/blocks/dirt.png".to_string(),
                "textures/blocks/ores/iron.png".to_string(),
                "textures/blocks/stone.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_search_partial_prefix() {
        let temp_dir = create_test_tree();
        let source = DirectoryAssetSource::new(temp_dir.path());

        let found = source
            .search("minecraft", "textures/blocks/st", ".png")
            .expect("search");
        assert_eq!(found, vec!["textures/blocks/stone.png".to_string()]);
    }

    #[test]
    fn test_search_missing_namespace_is_empty() {
        let temp_dir = create_test_tree();
        let source = DirectoryAssetSource::new(temp_dir.path());

        let found = source
            .search("other", "textures/blocks/", ".png")
            .expect("search");
        assert!(found.is_empty());
    }

    #[test]
    fn test_open() {
        let temp_dir = create_test_tree();
        let source = DirectoryAssetSource::new(temp_dir.path());

        let mut reader = source
            .open("minecraft", "textures/blocks/stone.png")
            .expect("open");
        let mut contents = String::new();
        reader.read_to_string(&mut contents).expect("read");
        assert_eq!(contents, "stone");
    }

    #[test]
    fn test_open_missing_and_escaping_paths() {
        let temp_dir = create_test_tree();
        let source = DirectoryAssetSource::new(temp_dir.path());

        assert!(matches!(
            source.open("minecraft", "textures/blocks/gold.png"),
            Err(AtlasError::AssetNotFound { .. })
        ));
        assert!(matches!(
            source.open("minecraft", "../minecraft/textures/blocks/stone.png"),
            Err(AtlasError::AssetNotFound { .. })
        ));
    }
}
