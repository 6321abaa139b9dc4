//! The fixed asset catalog: which textures, materials and lights exist.

use cgmath::Vector3;

use crate::data_structures::light::{DirectionalLight, LightRig, PointLight};

/// A texture file and the tag it is registered under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureAsset {
    pub tag: &'static str,
    pub path: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialSpec {
    pub tag: &'static str,
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

const fn texture(tag: &'static str, path: &'static str) -> TextureAsset {
    TextureAsset { tag, path }
}

const fn material(
    tag: &'static str,
    diffuse: [f32; 3],
    specular: [f32; 3],
    shininess: f32,
) -> MaterialSpec {
    MaterialSpec {
        tag,
        diffuse,
        specular,
        shininess,
    }
}

/// Loaded in this order, so the position here is the texture unit.
pub const TEXTURES: &[TextureAsset] = &[
    texture("floor", "textures/dark_wood_floor.JPG"),
    texture("shiplap", "textures/shiplap.JPG"),
    texture("brick", "textures/bricks.JPG"),
    texture("mantle", "textures/Wood_mantle.JPG"),
    texture("metal", "textures/black_metal.JPG"),
    texture("metal2", "textures/black_metal2.JPG"),
    texture("bark", "textures/pine_bark.JPG"),
    texture("tree_end", "textures/Tree_end.JPG"),
    texture("rusticwood", "textures/rusticwood.JPG"),
    texture("leaf", "textures/Leaf.JPG"),
    // screen image from www.wallpapercave.com
    texture("cartoon", "textures/BLUEY.JPG"),
];

pub const MATERIALS: &[MaterialSpec] = &[
    material("metal", [0.4, 0.4, 0.4], [0.7, 0.7, 0.6], 52.0),
    material("wood", [0.2, 0.2, 0.3], [0.0, 0.0, 0.0], 0.1),
    material("glass", [0.2, 0.2, 0.2], [1.0, 1.0, 1.0], 95.0),
    material("plate", [0.4, 0.4, 0.4], [0.2, 0.2, 0.2], 30.0),
    material("cheese", [0.6, 0.5, 0.3], [0.0, 0.0, 0.0], 0.1),
    material("bread", [0.7, 0.6, 0.5], [0.02, 0.02, 0.02], 0.001),
    material("darkbread", [0.5, 0.4, 0.3], [0.01, 0.01, 0.01], 0.001),
    material("shiplap", [0.8, 0.8, 0.9], [0.0, 0.0, 0.0], 2.0),
    material("grape", [0.4, 0.2, 0.4], [0.1, 0.05, 0.1], 0.55),
];

fn point_light(position: [f32; 3], ambient: f32, diffuse: f32, specular: f32) -> PointLight {
    PointLight {
        position: position.into(),
        ambient: Vector3::new(ambient, ambient, ambient),
        diffuse: Vector3::new(diffuse, diffuse, diffuse),
        specular: Vector3::new(specular, specular, specular),
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
        active: true,
    }
}

/// Dim grey sky light from above plus four lamps high up on either side of the chimney.
pub fn light_rig() -> LightRig {
    LightRig {
        directional: Some(DirectionalLight {
            direction: Vector3::new(-0.05, -0.3, -0.1),
            ambient: Vector3::new(0.18, 0.18, 0.18),
            diffuse: Vector3::new(0.6, 0.6, 0.6),
            specular: Vector3::new(0.0, 0.0, 0.0),
            active: true,
        }),
        points: [
            Some(point_light([-15.0, 17.0, 5.0], 0.2, 0.7, 0.1)),
            Some(point_light([15.0, 17.0, 5.0], 0.05, 0.3, 0.1)),
            Some(point_light([-15.0, 17.0, 6.0], 0.05, 0.2, 0.8)),
            Some(point_light([15.0, 17.0, 6.0], 0.05, 0.2, 0.8)),
        ],
    }
}
