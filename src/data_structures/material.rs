//! Surface materials and their registry.

use cgmath::Vector3;

/// Phong surface parameters pushed to the `material.*` uniforms.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub tag: String,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub shininess: f32,
}

/// Append-only list of materials, looked up by tag.
///
/// Tags are not deduplicated. Defining the same tag twice keeps both
/// records and lookups resolve to the one defined first.
#[derive(Clone, Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(
        &mut self,
        tag: impl Into<String>,
        diffuse: impl Into<Vector3<f32>>,
        specular: impl Into<Vector3<f32>>,
        shininess: f32,
    ) {
        self.materials.push(Material {
            tag: tag.into(),
            diffuse: diffuse.into(),
            specular: specular.into(),
            shininess,
        });
    }

    /// First material defined under `tag`, if any.
    pub fn lookup(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Materials in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }
}
