//! Scene composition.
//!
//! The room is authored as plain data: [`catalog`] lists the textures,
//! materials and lights, [`layout`] lists every mesh instance as a
//! [`Placement`]. [`SceneManager`] owns the registries built from the
//! catalog and walks the layout through a [`ShaderDispatcher`].

pub mod catalog;
pub mod layout;

use instant::Instant;

use crate::{
    context::SceneConfig,
    data_structures::{
        light::configure_lights,
        material::MaterialRegistry,
        mesh::{DrawFlags, MeshKind, MeshLibrary},
        transform::Transform,
    },
    dispatch::ShaderDispatcher,
    resources::{
        ImageLoader,
        texture::{TextureBackend, TextureRegistry},
    },
    shader::ShaderManager,
};

/// One draw call and the shader state it changes.
///
/// Fields left as `None` are not pushed, so the value from the previous
/// draw is reused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub mesh: MeshKind,
    pub transform: Option<Transform>,
    pub color: Option<[f32; 4]>,
    pub texture: Option<&'static str>,
    pub uv_scale: Option<[f32; 2]>,
    pub material: Option<&'static str>,
    pub flags: DrawFlags,
}

impl Placement {
    pub const fn new(mesh: MeshKind, transform: Transform) -> Self {
        Self {
            transform: Some(transform),
            ..Self::again(mesh)
        }
    }

    /// Draw `mesh` again with the transform of the previous draw.
    pub const fn again(mesh: MeshKind) -> Self {
        Self {
            mesh,
            transform: None,
            color: None,
            texture: None,
            uv_scale: None,
            material: None,
            flags: DrawFlags::ALL,
        }
    }

    pub const fn color(self, rgba: [f32; 4]) -> Self {
        Self {
            color: Some(rgba),
            ..self
        }
    }

    pub const fn texture(self, tag: &'static str) -> Self {
        Self {
            texture: Some(tag),
            ..self
        }
    }

    pub const fn uv_scale(self, u: f32, v: f32) -> Self {
        Self {
            uv_scale: Some([u, v]),
            ..self
        }
    }

    pub const fn material(self, tag: &'static str) -> Self {
        Self {
            material: Some(tag),
            ..self
        }
    }

    pub const fn flags(self, flags: DrawFlags) -> Self {
        Self { flags, ..self }
    }
}

/// A named run of placements drawn back to back.
#[derive(Clone, Copy, Debug)]
pub struct SceneGroup {
    pub name: &'static str,
    pub placements: &'static [Placement],
}

impl SceneGroup {
    pub const fn new(name: &'static str, placements: &'static [Placement]) -> Self {
        Self { name, placements }
    }
}

/// Push whatever `placement` sets, in transform, color, texture, UV scale,
/// material order, then draw its mesh.
pub fn place_and_draw<B: TextureBackend>(
    dispatcher: &ShaderDispatcher<'_, B>,
    shader: &mut impl ShaderManager,
    meshes: &mut impl MeshLibrary,
    placement: &Placement,
) {
    if let Some(transform) = &placement.transform {
        dispatcher.set_transform(shader, transform);
    }
    if let Some([r, g, b, a]) = placement.color {
        dispatcher.set_flat_color(shader, r, g, b, a);
    }
    if let Some(tag) = placement.texture {
        dispatcher.set_texture(shader, tag);
    }
    if let Some([u, v]) = placement.uv_scale {
        dispatcher.set_uv_scale(shader, u, v);
    }
    if let Some(tag) = placement.material {
        dispatcher.set_material(shader, tag);
    }
    meshes.draw(placement.mesh, placement.flags);
}

/// What [`SceneManager::prepare`] managed to set up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrepareReport {
    pub textures_loaded: usize,
    pub textures_failed: usize,
    pub materials: usize,
    pub point_lights: usize,
}

pub struct SceneManager<B: TextureBackend, L: ImageLoader> {
    textures: TextureRegistry<B>,
    materials: MaterialRegistry,
    loader: L,
    prepared: Option<PrepareReport>,
}

impl<B: TextureBackend, L: ImageLoader> SceneManager<B, L> {
    pub fn new(backend: B, loader: L, config: &SceneConfig) -> Self {
        Self {
            textures: TextureRegistry::with_capacity(backend, config.texture_capacity),
            materials: MaterialRegistry::new(),
            loader,
            prepared: None,
        }
    }

    /// Load every catalog texture and bind them to their units.
    ///
    /// A texture that fails to load is skipped; the objects using it are
    /// drawn with whatever sampler unit was last set. Returns the number of
    /// failures.
    pub fn load_scene_textures(&mut self) -> usize {
        let mut failed = 0;
        for asset in catalog::TEXTURES {
            if self
                .textures
                .load(&self.loader, asset.path, asset.tag)
                .is_err()
            {
                failed += 1;
            }
        }
        self.textures.bind_all();
        failed
    }

    pub fn define_object_materials(&mut self) {
        for spec in catalog::MATERIALS {
            self.materials
                .define(spec.tag, spec.diffuse, spec.specular, spec.shininess);
        }
    }

    /// Everything that happens once before the first frame: textures,
    /// materials, lights and mesh geometry.
    ///
    /// Only the first call does any work. Later calls return the first
    /// report until [`release`](Self::release) resets the scene.
    pub fn prepare(
        &mut self,
        shader: &mut impl ShaderManager,
        meshes: &mut impl MeshLibrary,
    ) -> PrepareReport {
        if let Some(report) = self.prepared {
            log::warn!("Scene is already prepared, keeping the loaded resources");
            return report;
        }
        let start = Instant::now();

        let textures_failed = self.load_scene_textures();
        log::debug!("Textures ready after {:?}", start.elapsed());

        self.define_object_materials();

        let rig = catalog::light_rig();
        configure_lights(shader, &rig);

        for kind in MeshKind::ALL {
            meshes.load(kind);
        }

        let report = PrepareReport {
            textures_loaded: self.textures.len(),
            textures_failed,
            materials: self.materials.len(),
            point_lights: rig.active_point_lights(),
        };
        log::info!(
            "Scene prepared in {:?}: {} textures ({} failed), {} materials, {} point lights",
            start.elapsed(),
            report.textures_loaded,
            report.textures_failed,
            report.materials,
            report.point_lights
        );
        self.prepared = Some(report);
        report
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared.is_some()
    }

    /// Draw the whole room. Returns the number of draw calls issued.
    pub fn render(&self, shader: &mut impl ShaderManager, meshes: &mut impl MeshLibrary) -> usize {
        let dispatcher = self.dispatcher();
        let mut draws = 0;
        for group in layout::SCENE {
            log::debug!("Rendering {} ({} draws)", group.name, group.placements.len());
            for placement in group.placements {
                place_and_draw(&dispatcher, shader, meshes, placement);
            }
            draws += group.placements.len();
        }
        draws
    }

    pub fn dispatcher(&self) -> ShaderDispatcher<'_, B> {
        ShaderDispatcher::new(&self.textures, &self.materials)
    }

    pub fn textures(&self) -> &TextureRegistry<B> {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Free all GPU textures and forget the materials, so the next
    /// [`prepare`](Self::prepare) starts over. Dropping the manager frees the
    /// textures too.
    pub fn release(&mut self) {
        self.textures.release_all();
        self.materials = MaterialRegistry::new();
        self.prepared = None;
    }
}
