//! GPU textures.
//!
//! This module provides [`Texture`], a wrapper around WGPU texture resources,
//! and the upload path from decoded pixels: RGB data is widened to RGBA, a
//! full mip chain is built on the CPU and every level is written to the GPU.

use anyhow::{Context, bail};
use image::{DynamicImage, RgbImage, RgbaImage, imageops::FilterType};

use crate::resources::DecodedImage;

/// A GPU texture with a view and sampler.
///
/// Sampling repeats on both axes and filters linearly, across mip levels too.
#[derive(Clone, Debug)]
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub mip_level_count: u32,
}

impl Texture {
    /// Color textures are sampled as sRGB.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Upload a decoded image including all of its mip levels.
    ///
    /// # Arguments
    ///
    /// * `image` must be 3 (RGB) or 4 (RGBA) channel data
    /// * `label` is used as a debug label for the GPU resource
    pub fn from_decoded(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &DecodedImage,
        label: &str,
    ) -> anyhow::Result<Self> {
        let max_dimension = device.limits().max_texture_dimension_2d;
        if image.width == 0 || image.height == 0 {
            bail!("image '{label}' is empty");
        }
        if image.width > max_dimension || image.height > max_dimension {
            bail!(
                "image '{label}' is {}x{}, the device allows at most {max_dimension}",
                image.width,
                image.height
            );
        }

        let rgba = to_rgba(image).with_context(|| format!("pixel data of '{label}'"))?;
        let (width, height) = rgba.dimensions();
        let mip_level_count = mip_levels(width, height);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        write_level(queue, &texture, 0, &rgba);
        let mut level = rgba;
        for mip in 1..mip_level_count {
            let w = (level.width() / 2).max(1);
            let h = (level.height() / 2).max(1);
            level = image::imageops::resize(&level, w, h, FilterType::Triangle);
            write_level(queue, &texture, mip, &level);
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_default_sampler(device);

        Ok(Self {
            texture,
            view,
            sampler,
            mip_level_count,
        })
    }
}

/// Number of levels down to 1x1, the base level included.
pub fn mip_levels(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

fn to_rgba(image: &DecodedImage) -> anyhow::Result<RgbaImage> {
    let (w, h) = (image.width, image.height);
    match image.channels {
        3 => RgbImage::from_raw(w, h, image.pixels.clone())
            .map(|rgb| DynamicImage::ImageRgb8(rgb).into_rgba8())
            .context("buffer is too short for RGB"),
        4 => RgbaImage::from_raw(w, h, image.pixels.clone()).context("buffer is too short for RGBA"),
        n => bail!("{n} channels cannot be uploaded"),
    }
}

fn write_level(queue: &wgpu::Queue, texture: &wgpu::Texture, mip_level: u32, level: &RgbaImage) {
    let (width, height) = level.dimensions();
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            aspect: wgpu::TextureAspect::All,
            texture,
            mip_level,
            origin: wgpu::Origin3d::ZERO,
        },
        level.as_raw(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
}

pub fn create_default_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Linear,
        ..Default::default()
    })
}
