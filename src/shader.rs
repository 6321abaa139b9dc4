//! The shader-manager seam.
//!
//! Host code talks to the shading stage exclusively through named uniform
//! pushes. [`ShaderManager`] is that capability; [`UniformStore`] is an
//! in-memory implementation that records the latest value for every name,
//! handy for inspecting state without a GPU.

use std::collections::HashMap;

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// Uniform names the core pushes. The shading stage must declare these.
pub mod names {
    pub const MODEL: &str = "model";
    pub const COLOR: &str = "objectColor";
    pub const TEXTURE: &str = "objectTexture";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const UV_SCALE: &str = "UVscale";

    pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    pub const DIRECTIONAL_DIRECTION: &str = "directionalLight.direction";
    pub const DIRECTIONAL_AMBIENT: &str = "directionalLight.ambient";
    pub const DIRECTIONAL_DIFFUSE: &str = "directionalLight.diffuse";
    pub const DIRECTIONAL_SPECULAR: &str = "directionalLight.specular";
    pub const DIRECTIONAL_ACTIVE: &str = "directionalLight.bActive";

    /// `pointLights[index].field`
    pub fn point_light(index: usize, field: &str) -> String {
        format!("pointLights[{index}].{field}")
    }
}

/// Accepts named uniform values for the active shading stage.
pub trait ShaderManager {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
}

/// A single uniform value as last pushed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
    Mat4(Matrix4<f32>),
}

/// Last-write-wins map from uniform name to value.
///
/// Also counts pushes per name so callers can tell "never pushed" apart from
/// "pushed the same value again".
#[derive(Clone, Debug, Default)]
pub struct UniformStore {
    values: HashMap<String, UniformValue>,
    pushes: HashMap<String, usize>,
}

impl UniformStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.values.get(name).copied()
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            UniformValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn int(&self, name: &str) -> Option<i32> {
        match self.get(name)? {
            UniformValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name)? {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn vec2(&self, name: &str) -> Option<Vector2<f32>> {
        match self.get(name)? {
            UniformValue::Vec2(v) => Some(v),
            _ => None,
        }
    }

    pub fn vec3(&self, name: &str) -> Option<Vector3<f32>> {
        match self.get(name)? {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn vec4(&self, name: &str) -> Option<Vector4<f32>> {
        match self.get(name)? {
            UniformValue::Vec4(v) => Some(v),
            _ => None,
        }
    }

    pub fn mat4(&self, name: &str) -> Option<Matrix4<f32>> {
        match self.get(name)? {
            UniformValue::Mat4(v) => Some(v),
            _ => None,
        }
    }

    /// How many times `name` has been pushed.
    pub fn push_count(&self, name: &str) -> usize {
        self.pushes.get(name).copied().unwrap_or(0)
    }

    /// Iterates over every uniform that has been pushed at least once.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn insert(&mut self, name: &str, value: UniformValue) {
        self.values.insert(name.to_string(), value);
        *self.pushes.entry(name.to_string()).or_insert(0) += 1;
    }
}

impl ShaderManager for UniformStore {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.insert(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.insert(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.insert(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.insert(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.insert(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.insert(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.insert(name, UniformValue::Mat4(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_push_wins_and_is_counted() {
        let mut store = UniformStore::new();
        store.set_bool(names::USE_TEXTURE, true);
        store.set_bool(names::USE_TEXTURE, false);

        assert_eq!(store.bool(names::USE_TEXTURE), Some(false));
        assert_eq!(store.push_count(names::USE_TEXTURE), 2);
        assert_eq!(store.push_count(names::COLOR), 0);
    }

    #[test]
    fn typed_getter_rejects_other_kinds() {
        let mut store = UniformStore::new();
        store.set_int(names::TEXTURE, 3);

        assert_eq!(store.int(names::TEXTURE), Some(3));
        assert_eq!(store.float(names::TEXTURE), None);
    }

    #[test]
    fn point_light_names_are_indexed() {
        assert_eq!(names::point_light(2, "linear"), "pointLights[2].linear");
    }
}
