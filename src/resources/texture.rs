//! Tagged texture registry.
//!
//! The registry owns every GPU texture the scene uses. Textures are addressed
//! by a human-readable tag, and their insertion order doubles as the texture
//! unit they get bound to.

use std::{fmt::Debug, path::Path};

use crate::{
    data_structures::texture::Texture,
    error::{Result, TextureError},
    resources::{DecodedImage, ImageLoader},
};

/// How many textures the registry holds unless told otherwise.
pub const DEFAULT_TEXTURE_CAPACITY: usize = 16;

/// Position of a loaded texture, which is also its texture unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureSlot(u32);

impl TextureSlot {
    pub fn index(self) -> u32 {
        self.0
    }
}

/// GPU side of the registry: allocation, unit binding and release.
pub trait TextureBackend {
    type Handle: Debug;

    /// Allocate a texture (repeat wrap, linear filtering, full mip chain) and upload `image`.
    fn create(&mut self, image: &DecodedImage, tag: &str) -> anyhow::Result<Self::Handle>;

    /// Make `handle` the texture sampled from `unit`.
    fn bind(&mut self, unit: u32, handle: &Self::Handle);

    /// Free the GPU memory behind `handle`.
    fn release(&mut self, handle: Self::Handle);
}

#[derive(Debug)]
struct TextureEntry<H> {
    tag: String,
    handle: H,
}

/// Fixed-capacity, insertion-ordered collection of tagged textures.
///
/// Lookups scan in insertion order, so a duplicated tag always resolves to
/// the texture loaded first. All handles are released by
/// [`release_all`](Self::release_all) or when the registry is dropped.
#[derive(Debug)]
pub struct TextureRegistry<B: TextureBackend> {
    backend: B,
    entries: Vec<TextureEntry<B::Handle>>,
    capacity: usize,
}

impl<B: TextureBackend> TextureRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self::with_capacity(backend, DEFAULT_TEXTURE_CAPACITY)
    }

    pub fn with_capacity(backend: B, capacity: usize) -> Self {
        Self {
            backend,
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Decode the image at `path`, upload it and register it under `tag`.
    ///
    /// On failure the registry is left exactly as it was.
    pub fn load(
        &mut self,
        loader: &impl ImageLoader,
        path: impl AsRef<Path>,
        tag: &str,
    ) -> Result<TextureSlot> {
        let path = path.as_ref();
        if self.is_full() {
            log::error!(
                "Could not load image {}: all {} texture slots are taken",
                path.display(),
                self.capacity
            );
            return Err(TextureError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let image = loader.load(path).inspect_err(|e| log::error!("{e}"))?;
        if !matches!(image.channels, 3 | 4) {
            let err = TextureError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels: image.channels,
            };
            log::error!("{err}");
            return Err(err);
        }
        log::info!(
            "Successfully loaded image: {}, width: {}, height: {}, channels: {}",
            path.display(),
            image.width,
            image.height,
            image.channels
        );

        let handle = self
            .backend
            .create(&image, tag)
            .map_err(|e| TextureError::Upload {
                tag: tag.to_string(),
                source: e.into(),
            })
            .inspect_err(|e| log::error!("{e}"))?;
        // the decoded pixels are no longer needed once they live on the GPU
        drop(image);

        let slot = TextureSlot(self.entries.len() as u32);
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });
        Ok(slot)
    }

    /// Bind every texture to the unit matching its slot.
    pub fn bind_all(&mut self) {
        for (unit, entry) in self.entries.iter().enumerate() {
            self.backend.bind(unit as u32, &entry.handle);
        }
    }

    pub fn find_handle(&self, tag: &str) -> Option<&B::Handle> {
        self.entries.iter().find(|e| e.tag == tag).map(|e| &e.handle)
    }

    pub fn find_slot(&self, tag: &str) -> Option<TextureSlot> {
        self.entries
            .iter()
            .position(|e| e.tag == tag)
            .map(|i| TextureSlot(i as u32))
    }

    /// Release every held texture. Safe to call repeatedly.
    pub fn release_all(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        log::debug!("Releasing {} textures", self.entries.len());
        for entry in self.entries.drain(..) {
            self.backend.release(entry.handle);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Tags in slot order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.tag.as_str())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: TextureBackend> Drop for TextureRegistry<B> {
    fn drop(&mut self) {
        self.release_all();
    }
}

/// [`TextureBackend`] that uploads through WGPU.
///
/// WGPU has no global texture units, so binding records the texture in a
/// unit table that the render pass reads when it builds its bind groups.
#[derive(Debug)]
pub struct WgpuTextureBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    units: Vec<Option<Texture>>,
}

impl WgpuTextureBackend {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            units: Vec::new(),
        }
    }

    /// Texture currently bound to `unit`.
    pub fn bound(&self, unit: u32) -> Option<&Texture> {
        self.units.get(unit as usize).and_then(Option::as_ref)
    }
}

impl TextureBackend for WgpuTextureBackend {
    type Handle = Texture;

    fn create(&mut self, image: &DecodedImage, tag: &str) -> anyhow::Result<Texture> {
        Texture::from_decoded(&self.device, &self.queue, image, tag)
    }

    fn bind(&mut self, unit: u32, handle: &Texture) {
        let unit = unit as usize;
        if self.units.len() <= unit {
            self.units.resize(unit + 1, None);
        }
        self.units[unit] = Some(handle.clone());
    }

    fn release(&mut self, handle: Texture) {
        self.units
            .iter_mut()
            .filter(|bound| bound.as_ref().is_some_and(|t| t.texture == handle.texture))
            .for_each(|bound| *bound = None);
        handle.texture.destroy();
    }
}
