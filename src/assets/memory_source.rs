//! In-memory asset source
//!
//! Handy for tools and tests. Contents can be replaced at any time; the next
//! registry rebuild picks up whatever is stored then.

use super::AssetSource;
use crate::error::{AtlasError, AtlasResult};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::sync::Arc;

#[derive(Default)]
pub struct MemoryAssetSource {
    /// Keyed by (namespace, path); BTreeMap keeps search results ordered
    entries: RwLock<BTreeMap<(String, String), Arc<[u8]>>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an asset
    pub fn insert(&self, namespace: &str, path: &str, bytes: impl Into<Vec<u8>>) {
        let bytes: Vec<u8> = bytes.into();
        let bytes: Arc<[u8]> = Arc::from(bytes);
        self.entries
            .write()
            .insert((namespace.to_string(), path.to_string()), bytes);
    }

    pub fn remove(&self, namespace: &str, path: &str) -> bool {
        self.entries
            .write()
            .remove(&(namespace.to_string(), path.to_string()))
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl AssetSource for MemoryAssetSource {
    fn search(&self, namespace: &str, prefix: &str, suffix: &str) -> AtlasResult<Vec<String>> {
        Ok(self
            .entries
            .read()
            .keys()
            .filter(|(ns, path)| ns == namespace && path.starts_with(prefix) && path.ends_with(suffix))
            .map(|(_, path)| path.clone())
            .collect())
    }

    fn open(&self, namespace: &str, path: &str) -> AtlasResult<Box<dyn Read + Send>> {
        let entries = self.entries.read();
        let bytes = entries
            .get(&(namespace.to_string(), path.to_string()))
            .ok_or_else(|| AtlasError::AssetNotFound {
                namespace: namespace.to_string(),
                path: path.to_string(),
            })?;
        Ok(Box::new(Cursor::new(Arc::clone(bytes))))
    }
}
