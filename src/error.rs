//! Error handling for hearth-atlas
//!
//! A single error type covers packing, asset access, decoding and the
//! registry. Rebuild failures wrap the underlying cause together with the
//! asset path that triggered it, so a failed reload can be reported without
//! touching the texture set that is currently being rendered.

/// Main error type for hearth-atlas
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    // Packing Errors
    #[error("Atlas page full: no room for {width}x{height}")]
    PageFull { width: u32, height: u32 },

    #[error(
        "Placement failed: {width}x{height} does not fit an empty {page_width}x{page_height} page"
    )]
    PlacementFailed {
        width: u32,
        height: u32,
        page_width: u32,
        page_height: u32,
    },

    #[error("Pixel data mismatch: expected {expected} bytes for {width}x{height}, found {found}")]
    PixelDataMismatch {
        width: u32,
        height: u32,
        expected: usize,
        found: usize,
    },

    // Asset Errors
    #[error("Asset not found: {namespace}:{path}")]
    AssetNotFound { namespace: String, path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    // Registry Errors
    #[error("Rebuild aborted at {path}: {source}")]
    Rebuild {
        path: String,
        #[source]
        source: Box<AtlasError>,
    },

    #[error("Texture registry has not been built yet")]
    NotReady,

    // Configuration Errors
    #[error("Invalid config: {field} ({reason})")]
    InvalidConfig { field: String, reason: String },
}

/// Type alias for Results in hearth-atlas
pub type AtlasResult<T> = Result<T, AtlasError>;

impl AtlasError {
    /// Wrap an error with the asset path that caused a rebuild to abort
    pub fn during_rebuild(path: impl Into<String>, error: AtlasError) -> Self {
        AtlasError::Rebuild {
            path: path.into(),
            source: Box::new(error),
        }
    }
}

impl From<image::ImageError> for AtlasError {
    fn from(error: image::ImageError) -> Self {
        match error {
            image::ImageError::Unsupported(e) => AtlasError::UnsupportedFormat(e.to_string()),
            image::ImageError::IoError(e) => AtlasError::Io(e),
            other => AtlasError::Decode(other.to_string()),
        }
    }
}
