use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use wgpu::util::DeviceExt;

use crate::{
    data_structures::light::MAX_POINT_LIGHTS,
    shader::{ShaderManager, names},
};

/// Per-draw values: transform, surface and material.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub uv_scale: [f32; 2],
    pub use_texture: u32,
    pub texture_slot: u32,
    pub diffuse: [f32; 3],
    pub shininess: f32,
    pub specular: [f32; 3],
    pub use_lighting: u32,
}

impl Default for ObjectUniform {
    fn default() -> Self {
        Self {
            model: cgmath::Matrix4::from_scale(1.0).into(),
            color: [1.0; 4],
            uv_scale: [1.0; 2],
            use_texture: 0,
            texture_slot: 0,
            diffuse: [0.0; 3],
            shininess: 0.0,
            specular: [0.0; 3],
            use_lighting: 0,
        }
    }
}

// Scalars are tucked into the padding after each vec3, uniforms require 16 byte spacing.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightUniform {
    pub direction: [f32; 3],
    pub active: u32,
    pub ambient: [f32; 3],
    _padding: u32,
    pub diffuse: [f32; 3],
    _padding2: u32,
    pub specular: [f32; 3],
    _padding3: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 3],
    pub active: u32,
    pub ambient: [f32; 3],
    pub constant: f32,
    pub diffuse: [f32; 3],
    pub linear: f32,
    pub specular: [f32; 3],
    pub quadratic: f32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub directional: DirectionalLightUniform,
    pub points: [PointLightUniform; MAX_POINT_LIGHTS],
}

/// CPU copy of everything the shading stage reads, addressed by uniform name.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct UniformBlock {
    pub object: ObjectUniform,
    pub lights: LightsUniform,
}

impl UniformBlock {
    fn point_light<'a, 'n>(
        &'a mut self,
        name: &'n str,
    ) -> Option<(&'a mut PointLightUniform, &'n str)> {
        let rest = name.strip_prefix("pointLights[")?;
        let (index, field) = rest.split_once("].")?;
        let index: usize = index.parse().ok()?;
        self.lights.points.get_mut(index).map(|light| (light, field))
    }
}

fn unknown(name: &str) {
    log::warn!("Uniform '{name}' is not part of the shader interface, ignoring it");
}

impl ShaderManager for UniformBlock {
    fn set_bool(&mut self, name: &str, value: bool) {
        let value = value as u32;
        match name {
            names::USE_TEXTURE => self.object.use_texture = value,
            names::USE_LIGHTING => self.object.use_lighting = value,
            names::DIRECTIONAL_ACTIVE => self.lights.directional.active = value,
            _ => match self.point_light(name) {
                Some((light, "bActive")) => light.active = value,
                _ => unknown(name),
            },
        }
    }

    fn set_int(&mut self, name: &str, value: i32) {
        match (name, u32::try_from(value)) {
            (names::TEXTURE, Ok(slot)) => self.object.texture_slot = slot,
            (names::TEXTURE, Err(_)) => {
                log::warn!("Refusing negative texture unit {value} for '{name}'")
            }
            // bools pushed as ints land in the same flags
            (names::USE_TEXTURE | names::USE_LIGHTING, _) => self.set_bool(name, value != 0),
            _ => unknown(name),
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        if name == names::MATERIAL_SHININESS {
            self.object.shininess = value;
            return;
        }
        match self.point_light(name) {
            Some((light, "constant")) => light.constant = value,
            Some((light, "linear")) => light.linear = value,
            Some((light, "quadratic")) => light.quadratic = value,
            _ => unknown(name),
        }
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        match name {
            names::UV_SCALE => self.object.uv_scale = value.into(),
            _ => unknown(name),
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        let value: [f32; 3] = value.into();
        match name {
            names::MATERIAL_DIFFUSE => self.object.diffuse = value,
            names::MATERIAL_SPECULAR => self.object.specular = value,
            names::DIRECTIONAL_DIRECTION => self.lights.directional.direction = value,
            names::DIRECTIONAL_AMBIENT => self.lights.directional.ambient = value,
            names::DIRECTIONAL_DIFFUSE => self.lights.directional.diffuse = value,
            names::DIRECTIONAL_SPECULAR => self.lights.directional.specular = value,
            _ => match self.point_light(name) {
                Some((light, "position")) => light.position = value,
                Some((light, "ambient")) => light.ambient = value,
                Some((light, "diffuse")) => light.diffuse = value,
                Some((light, "specular")) => light.specular = value,
                _ => unknown(name),
            },
        }
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        match name {
            names::COLOR => self.object.color = value.into(),
            _ => unknown(name),
        }
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        match name {
            names::MODEL => self.object.model = value.into(),
            _ => unknown(name),
        }
    }
}

/// [`ShaderManager`] backed by WGPU uniform buffers.
///
/// Pushes only touch the CPU copy. The GPU sees whatever was pushed up to
/// the last [`upload`](Self::upload), so a renderer uploads once per draw.
pub struct GpuUniforms {
    pub block: UniformBlock,
    pub object_buffer: wgpu::Buffer,
    pub lights_buffer: wgpu::Buffer,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl GpuUniforms {
    pub fn new(device: &wgpu::Device) -> Self {
        let block = UniformBlock::default();
        let object_buffer =
            mk_buffer(device, "Object Uniform Buffer", bytemuck::bytes_of(&block.object));
        let lights_buffer =
            mk_buffer(device, "Lights Uniform Buffer", bytemuck::bytes_of(&block.lights));
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &object_buffer, &lights_buffer);
        Self {
            block,
            object_buffer,
            lights_buffer,
            bind_group_layout,
            bind_group,
        }
    }

    pub fn upload(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.object_buffer, 0, bytemuck::bytes_of(&self.block.object));
        queue.write_buffer(&self.lights_buffer, 0, bytemuck::bytes_of(&self.block.lights));
    }
}

impl ShaderManager for GpuUniforms {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.block.set_bool(name, value)
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.block.set_int(name, value)
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.block.set_float(name, value)
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.block.set_vec2(name, value)
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.block.set_vec3(name, value)
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.block.set_vec4(name, value)
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.block.set_mat4(name, value)
    }
}

pub fn mk_buffer(device: &wgpu::Device, label: &str, contents: &[u8]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    };
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[uniform_entry(0), uniform_entry(1)],
        label: Some("scene_uniforms_bind_group_layout"),
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    object_buffer: &wgpu::Buffer,
    lights_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: object_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: lights_buffer.as_entire_binding(),
            },
        ],
        label: Some("scene_uniforms_bind_group"),
    })
}
