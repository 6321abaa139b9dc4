use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    rc::Rc,
};

use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use hearth::{
    TextureError,
    data_structures::mesh::{DrawFlags, MeshKind, MeshLibrary},
    error::Result,
    resources::{DecodedImage, ImageLoader, texture::TextureBackend},
    scene::catalog,
    shader::{ShaderManager, UniformStore},
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn image(width: u32, height: u32, channels: u8) -> DecodedImage {
    DecodedImage {
        width,
        height,
        channels,
        pixels: vec![0x80; (width * height * channels as u32) as usize],
    }
}

/// In-memory [`ImageLoader`]. Images come back exactly as stored, whatever
/// their channel count. Paths that were never added fail with a not-found
/// I/O error.
#[derive(Debug, Default)]
pub struct FakeLoader {
    images: HashMap<PathBuf, DecodedImage>,
    requests: RefCell<Vec<PathBuf>>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A 2x2 image with `channels` channels at `path`.
    pub fn with_image(mut self, path: impl Into<PathBuf>, channels: u8) -> Self {
        self.images.insert(path.into(), image(2, 2, channels));
        self
    }

    /// Every texture of the scene catalog as RGB, except the tags in `missing`.
    pub fn catalog_without(missing: &[&str]) -> Self {
        catalog::TEXTURES
            .iter()
            .filter(|asset| !missing.contains(&asset.tag))
            .fold(Self::new(), |loader, asset| loader.with_image(asset.path, 3))
    }

    pub fn catalog() -> Self {
        Self::catalog_without(&[])
    }

    pub fn requests(&self) -> Vec<PathBuf> {
        self.requests.borrow().clone()
    }
}

impl ImageLoader for FakeLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage> {
        self.requests.borrow_mut().push(path.to_path_buf());
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| TextureError::Io {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }
}

/// Everything a [`RecordingBackend`] was asked to do.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BackendLog {
    pub created: Vec<(String, u32)>,
    pub bound: Vec<(u32, u32)>,
    pub released: Vec<u32>,
}

/// [`TextureBackend`] with numbered handles. The log is shared so it can be
/// inspected after the registry owning the backend is gone.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_handle: u32,
    failing_tags: HashSet<String>,
    log: Rc<RefCell<BackendLog>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            next_handle: 100,
            ..Default::default()
        }
    }

    pub fn failing_on(mut self, tag: &str) -> Self {
        self.failing_tags.insert(tag.to_string());
        self
    }

    pub fn log(&self) -> Rc<RefCell<BackendLog>> {
        Rc::clone(&self.log)
    }
}

impl TextureBackend for RecordingBackend {
    type Handle = u32;

    fn create(&mut self, _image: &DecodedImage, tag: &str) -> anyhow::Result<u32> {
        if self.failing_tags.contains(tag) {
            anyhow::bail!("out of video memory");
        }
        let handle = self.next_handle;
        self.next_handle += 1;
        self.log.borrow_mut().created.push((tag.to_string(), handle));
        Ok(handle)
    }

    fn bind(&mut self, unit: u32, handle: &u32) {
        self.log.borrow_mut().bound.push((unit, *handle));
    }

    fn release(&mut self, handle: u32) {
        self.log.borrow_mut().released.push(handle);
    }
}

/// A [`UniformStore`] that can be shared with a [`DrawLog`].
#[derive(Debug, Default, Clone)]
pub struct SharedUniforms(pub Rc<RefCell<UniformStore>>);

impl SharedUniforms {
    pub fn snapshot(&self) -> UniformStore {
        self.0.borrow().clone()
    }
}

impl ShaderManager for SharedUniforms {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.0.borrow_mut().set_bool(name, value)
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.0.borrow_mut().set_int(name, value)
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.0.borrow_mut().set_float(name, value)
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.0.borrow_mut().set_vec2(name, value)
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.0.borrow_mut().set_vec3(name, value)
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.0.borrow_mut().set_vec4(name, value)
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.0.borrow_mut().set_mat4(name, value)
    }
}

/// One draw call and the shader state it saw.
#[derive(Debug, Clone)]
pub struct Draw {
    pub kind: MeshKind,
    pub flags: DrawFlags,
    pub uniforms: UniformStore,
}

/// [`MeshLibrary`] that records loads and, for every draw, a copy of the
/// uniforms in effect.
#[derive(Debug, Default)]
pub struct DrawLog {
    pub shader: SharedUniforms,
    pub loaded: Vec<MeshKind>,
    pub draws: Vec<Draw>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shader(&self) -> SharedUniforms {
        self.shader.clone()
    }
}

impl MeshLibrary for DrawLog {
    fn load(&mut self, kind: MeshKind) {
        self.loaded.push(kind);
    }

    fn draw(&mut self, kind: MeshKind, flags: DrawFlags) {
        self.draws.push(Draw {
            kind,
            flags,
            uniforms: self.shader.snapshot(),
        });
    }
}
