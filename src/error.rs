//! Error types for texture loading.
//!
//! Lookup misses are not errors: the registries return `Option` for those.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while bringing an image file onto the GPU.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("could not read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Only RGB and RGBA images can be uploaded.
    #[error("image {path} has {channels} color channels, expected 3 (RGB) or 4 (RGBA)")]
    UnsupportedChannels { path: PathBuf, channels: u8 },

    #[error("texture registry is full ({capacity} slots in use)")]
    CapacityExceeded { capacity: usize },

    #[error("GPU upload of texture '{tag}' failed: {source}")]
    Upload {
        tag: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

pub type Result<T, E = TextureError> = std::result::Result<T, E>;
