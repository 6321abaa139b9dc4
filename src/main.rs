use std::collections::HashMap;

use hearth::{
    context::{GpuContext, SceneConfig},
    data_structures::mesh::{DrawFlags, MeshKind, MeshLibrary},
    pipelines::uniforms::GpuUniforms,
    resources::{ImageCrateLoader, texture::WgpuTextureBackend},
    scene::SceneManager,
};

/// Counts loads and draws per shape. Geometry lives with the host renderer.
#[derive(Debug, Default)]
struct DrawCounter {
    loaded: Vec<MeshKind>,
    draws: HashMap<MeshKind, usize>,
}

impl MeshLibrary for DrawCounter {
    fn load(&mut self, kind: MeshKind) {
        self.loaded.push(kind);
    }

    fn draw(&mut self, kind: MeshKind, _flags: DrawFlags) {
        *self.draws.entry(kind).or_default() += 1;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SceneConfig::from_env();
    let gpu = futures::executor::block_on(GpuContext::new_headless())?;

    let mut uniforms = GpuUniforms::new(&gpu.device);
    let backend = WgpuTextureBackend::new(gpu.device.clone(), gpu.queue.clone());
    let loader = ImageCrateLoader::new(&config.asset_root);
    let mut scene = SceneManager::new(backend, loader, &config);
    let mut meshes = DrawCounter::default();

    let report = scene.prepare(&mut uniforms, &mut meshes);
    if report.textures_failed > 0 {
        log::warn!(
            "{} textures could not be loaded from {}",
            report.textures_failed,
            config.asset_root.display()
        );
    }

    // One pass over the layout to check it resolves against the loaded
    // catalog. Nothing is rasterized, so only the final state is uploaded.
    let draws = scene.render(&mut uniforms, &mut meshes);
    uniforms.upload(&gpu.queue);

    let mut per_kind: Vec<_> = meshes.draws.iter().collect();
    per_kind.sort_by_key(|(_, count)| std::cmp::Reverse(**count));
    log::info!(
        "Scene walked: {draws} draw calls over {} mesh kinds: {per_kind:?}",
        meshes.loaded.len()
    );

    scene.release();
    Ok(())
}
