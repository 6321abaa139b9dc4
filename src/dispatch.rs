//! Per-draw shader state.
//!
//! [`ShaderDispatcher`] turns draw intent (where a mesh goes, what it looks
//! like) into uniform pushes. It holds no state of its own: the current
//! shader state lives in the [`ShaderManager`] every call receives, and each
//! call overwrites only the uniforms it is about. Anything a caller does not
//! set before a draw keeps the value of the previous draw.
//!
//! The expected sequence per mesh instance is
//! [`set_transform`](ShaderDispatcher::set_transform), then
//! [`set_flat_color`](ShaderDispatcher::set_flat_color) and/or
//! [`set_texture`](ShaderDispatcher::set_texture), optionally
//! [`set_uv_scale`](ShaderDispatcher::set_uv_scale) and
//! [`set_material`](ShaderDispatcher::set_material), then the draw itself.

use cgmath::{Vector2, Vector4};

use crate::{
    data_structures::{material::MaterialRegistry, transform::Transform},
    resources::texture::{TextureBackend, TextureRegistry, TextureSlot},
    shader::{ShaderManager, names},
};

pub struct ShaderDispatcher<'a, B: TextureBackend> {
    textures: &'a TextureRegistry<B>,
    materials: &'a MaterialRegistry,
}

impl<'a, B: TextureBackend> ShaderDispatcher<'a, B> {
    pub fn new(textures: &'a TextureRegistry<B>, materials: &'a MaterialRegistry) -> Self {
        Self {
            textures,
            materials,
        }
    }

    /// Push the model matrix `T · Rz · Ry · Rx · S` for `transform`.
    pub fn set_transform(&self, shader: &mut impl ShaderManager, transform: &Transform) {
        shader.set_mat4(names::MODEL, transform.to_matrix());
    }

    /// Draw with a flat color instead of a texture.
    pub fn set_flat_color(&self, shader: &mut impl ShaderManager, r: f32, g: f32, b: f32, a: f32) {
        shader.set_bool(names::USE_TEXTURE, false);
        shader.set_vec4(names::COLOR, Vector4::new(r, g, b, a));
    }

    /// Draw with the texture registered under `tag`.
    ///
    /// Texturing is switched on either way. When the tag is unknown no
    /// sampler unit is pushed, the previous one stays in effect, and `None`
    /// is returned.
    pub fn set_texture(&self, shader: &mut impl ShaderManager, tag: &str) -> Option<TextureSlot> {
        shader.set_bool(names::USE_TEXTURE, true);
        match self.textures.find_slot(tag) {
            Some(slot) => {
                shader.set_int(names::TEXTURE, slot.index() as i32);
                Some(slot)
            }
            None => {
                log::warn!("No texture is registered under '{tag}', keeping the bound unit");
                None
            }
        }
    }

    pub fn set_uv_scale(&self, shader: &mut impl ShaderManager, u: f32, v: f32) {
        shader.set_vec2(names::UV_SCALE, Vector2::new(u, v));
    }

    /// Push the material registered under `tag`.
    ///
    /// Returns `false` and leaves the material uniforms untouched when there
    /// is no such material.
    pub fn set_material(&self, shader: &mut impl ShaderManager, tag: &str) -> bool {
        let Some(material) = self.materials.lookup(tag) else {
            log::debug!("No material '{tag}', previous material stays in effect");
            return false;
        };
        shader.set_vec3(names::MATERIAL_DIFFUSE, material.diffuse);
        shader.set_vec3(names::MATERIAL_SPECULAR, material.specular);
        shader.set_float(names::MATERIAL_SHININESS, material.shininess);
        true
    }
}
