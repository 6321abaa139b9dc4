//! Light sources for the lit shading path.
//!
//! Lights are configured once while the scene is prepared. Their values go
//! straight into uniforms and are not kept anywhere else.

use cgmath::Vector3;

use crate::shader::{ShaderManager, names};

/// Number of point-light slots the shading stage declares.
pub const MAX_POINT_LIGHTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub active: bool,
}

/// A positional light with constant/linear/quadratic attenuation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
    pub active: bool,
}

/// One directional light and up to [`MAX_POINT_LIGHTS`] point lights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightRig {
    pub directional: Option<DirectionalLight>,
    pub points: [Option<PointLight>; MAX_POINT_LIGHTS],
}

impl LightRig {
    pub fn active_point_lights(&self) -> usize {
        self.points.iter().flatten().filter(|p| p.active).count()
    }
}

/// Switches the shader to the lit path and pushes every configured light.
///
/// Unused point-light slots are pushed as inactive so a previous rig cannot
/// leak into this one.
pub fn configure_lights(shader: &mut impl ShaderManager, rig: &LightRig) {
    shader.set_bool(names::USE_LIGHTING, true);

    match &rig.directional {
        Some(light) => {
            shader.set_vec3(names::DIRECTIONAL_DIRECTION, light.direction);
            shader.set_vec3(names::DIRECTIONAL_AMBIENT, light.ambient);
            shader.set_vec3(names::DIRECTIONAL_DIFFUSE, light.diffuse);
            shader.set_vec3(names::DIRECTIONAL_SPECULAR, light.specular);
            shader.set_bool(names::DIRECTIONAL_ACTIVE, light.active);
        }
        None => shader.set_bool(names::DIRECTIONAL_ACTIVE, false),
    }

    for (index, slot) in rig.points.iter().enumerate() {
        let name = |field: &str| names::point_light(index, field);
        match slot {
            Some(light) => {
                shader.set_vec3(&name("position"), light.position);
                shader.set_vec3(&name("ambient"), light.ambient);
                shader.set_vec3(&name("diffuse"), light.diffuse);
                shader.set_vec3(&name("specular"), light.specular);
                shader.set_float(&name("constant"), light.constant);
                shader.set_float(&name("linear"), light.linear);
                shader.set_float(&name("quadratic"), light.quadratic);
                shader.set_bool(&name("bActive"), light.active);
            }
            None => shader.set_bool(&name("bActive"), false),
        }
    }

    log::debug!(
        "Lights configured: directional={}, point lights={}",
        rig.directional.is_some(),
        rig.active_point_lights()
    );
}
