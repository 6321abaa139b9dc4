use std::path::PathBuf;

use anyhow::Context as _;

use crate::resources::texture::DEFAULT_TEXTURE_CAPACITY;

/// Overrides the directory textures are read from.
pub const ASSET_DIR_ENV: &str = "HEARTH_ASSET_DIR";

/// Asset directory, relative to the working directory, used when nothing else is set.
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Where assets live and how many textures the scene may hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    pub asset_root: PathBuf,
    pub texture_capacity: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_DIR),
            texture_capacity: DEFAULT_TEXTURE_CAPACITY,
        }
    }
}

impl SceneConfig {
    /// Defaults, with the asset root taken from `HEARTH_ASSET_DIR` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        match lookup(ASSET_DIR_ENV) {
            Some(dir) if !dir.trim().is_empty() => {
                log::debug!("Reading assets from {dir}");
                config.asset_root = PathBuf::from(dir);
            }
            _ => {}
        }
        config
    }
}

/// Device and queue without a window or surface.
#[derive(Debug)]
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    pub async fn new_headless() -> anyhow::Result<Self> {
        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..wgpu::InstanceDescriptor::new_without_display_handle()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("No suitable GPU adapter")?;
        log::info!("Using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("hearth device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .context("Failed to create device")?;

        Ok(Self { device, queue })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_asset_root_only() {
        let config = SceneConfig::from_lookup(|key| {
            assert_eq!(key, ASSET_DIR_ENV);
            Some("/srv/hearth".into())
        });
        assert_eq!(config.asset_root, PathBuf::from("/srv/hearth"));
        assert_eq!(config.texture_capacity, 16);
    }

    #[test]
    fn loader_and_config_share_the_default_root() {
        let loader = crate::resources::ImageCrateLoader::default();
        assert_eq!(loader.root(), SceneConfig::default().asset_root);
    }

    #[test]
    fn blank_env_keeps_default_root() {
        assert_eq!(SceneConfig::from_lookup(|_| Some("  ".into())), SceneConfig::default());
        assert_eq!(SceneConfig::from_lookup(|_| None), SceneConfig::default());
    }
}
