use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::{Result, TextureError};

/**
 * This module contains all logic for getting texture files off the disk and onto the GPU.
 */
pub mod texture;

/// Raw pixels of a decoded image, rows stored bottom-up.
///
/// `pixels` holds `width * height * channels` bytes. Only 3 (RGB) and 4
/// (RGBA) channel images are ever produced by a successful load.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub pixels: Vec<u8>,
}

/// Decodes an image file into raw pixels.
///
/// Implementations must flip the image vertically so that row 0 is the
/// bottom of the picture, matching the UV convention of the mesh library.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage>;
}

/// [`ImageLoader`] backed by the `image` crate, reading files below an asset root.
#[derive(Clone, Debug)]
pub struct ImageCrateLoader {
    root: PathBuf,
}

impl ImageCrateLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ImageCrateLoader {
    fn default() -> Self {
        Self::new(crate::context::DEFAULT_ASSET_DIR)
    }
}

impl ImageLoader for ImageCrateLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage> {
        let full_path = self.root.join(path);
        let data = load_binary(&full_path)?;
        let img = image::load_from_memory(&data).map_err(|source| TextureError::Decode {
            path: full_path.clone(),
            source,
        })?;
        decode(img.flipv(), &full_path)
    }
}

pub fn load_binary(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| TextureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Flattens a decoded image into 8-bit RGB or RGBA.
///
/// The channel count of the source decides the layout; 16-bit and float
/// images are narrowed to 8 bits per channel.
pub fn decode(img: DynamicImage, path: &Path) -> Result<DecodedImage> {
    let (width, height) = (img.width(), img.height());
    let channels = img.color().channel_count();
    let pixels = match channels {
        3 => img.into_rgb8().into_raw(),
        4 => img.into_rgba8().into_raw(),
        _ => {
            return Err(TextureError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels,
            });
        }
    };
    Ok(DecodedImage {
        width,
        height,
        channels,
        pixels,
    })
}
