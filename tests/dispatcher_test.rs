use cgmath::{Vector2, Vector3, Vector4};
use hearth::{
    data_structures::{material::MaterialRegistry, transform::Transform},
    dispatch::ShaderDispatcher,
    pipelines::uniforms::UniformBlock,
    resources::texture::TextureRegistry,
    shader::{UniformStore, names},
};

use crate::common::test_utils::{FakeLoader, RecordingBackend, init_logger};

mod common;

fn textures() -> TextureRegistry<RecordingBackend> {
    let loader = FakeLoader::new()
        .with_image("floor.jpg", 3)
        .with_image("bricks.jpg", 3)
        .with_image("metal.jpg", 3);
    let mut registry = TextureRegistry::new(RecordingBackend::new());
    registry.load(&loader, "floor.jpg", "floor").unwrap();
    registry.load(&loader, "bricks.jpg", "brick").unwrap();
    registry.load(&loader, "metal.jpg", "metal").unwrap();
    registry
}

fn wood_only() -> MaterialRegistry {
    let mut materials = MaterialRegistry::new();
    materials.define("wood", [0.2, 0.2, 0.3], [0.0, 0.0, 0.0], 0.1);
    materials
}

fn assert_close(actual: [[f32; 4]; 4], expected: [[f32; 4]; 4]) {
    for (a, e) in actual.iter().flatten().zip(expected.iter().flatten()) {
        assert!((a - e).abs() < 1e-5, "{actual:?} != {expected:?}");
    }
}

#[test]
fn should_push_scale_rotate_translate_model_matrix() {
    let (textures, materials) = (textures(), wood_only());
    let dispatcher = ShaderDispatcher::new(&textures, &materials);
    let mut shader = UniformStore::new();

    let transform = Transform::new([0.3, 3.5, 0.3], [20.0, 0.0, 90.0], [1.8, 2.1, -6.5]);
    dispatcher.set_transform(&mut shader, &transform);

    let expected = glam::Mat4::from_translation(glam::Vec3::new(1.8, 2.1, -6.5))
        * glam::Mat4::from_rotation_z(90f32.to_radians())
        * glam::Mat4::from_rotation_y(0.0)
        * glam::Mat4::from_rotation_x(20f32.to_radians())
        * glam::Mat4::from_scale(glam::Vec3::new(0.3, 3.5, 0.3));
    let pushed = shader.mat4(names::MODEL).expect("model matrix pushed");
    assert_close(pushed.into(), expected.to_cols_array_2d());
}

#[test]
fn should_push_slot_of_tagged_texture() {
    let (textures, materials) = (textures(), wood_only());
    let dispatcher = ShaderDispatcher::new(&textures, &materials);
    let mut shader = UniformStore::new();

    let slot = dispatcher.set_texture(&mut shader, "metal");

    assert_eq!(slot.map(|s| s.index()), Some(2));
    assert_eq!(shader.int(names::TEXTURE), Some(2));
    assert_eq!(shader.bool(names::USE_TEXTURE), Some(true));
}

#[test]
fn should_keep_previous_sampler_for_unknown_texture() {
    init_logger();
    let (textures, materials) = (textures(), wood_only());
    let dispatcher = ShaderDispatcher::new(&textures, &materials);
    let mut shader = UniformStore::new();
    dispatcher.set_texture(&mut shader, "brick");
    dispatcher.set_flat_color(&mut shader, 1.0, 0.0, 0.0, 1.0);

    assert_eq!(dispatcher.set_texture(&mut shader, "marble"), None);

    assert_eq!(shader.bool(names::USE_TEXTURE), Some(true));
    assert_eq!(shader.int(names::TEXTURE), Some(1));
    assert_eq!(shader.push_count(names::TEXTURE), 1);
}

#[test]
fn should_track_the_latest_color_or_texture_call() {
    let (textures, materials) = (textures(), wood_only());
    let dispatcher = ShaderDispatcher::new(&textures, &materials);
    let mut shader = UniformStore::new();

    dispatcher.set_texture(&mut shader, "floor");
    assert_eq!(shader.bool(names::USE_TEXTURE), Some(true));

    dispatcher.set_flat_color(&mut shader, 0.961, 0.871, 0.702, 1.0);
    assert_eq!(shader.bool(names::USE_TEXTURE), Some(false));
    assert_eq!(shader.vec4(names::COLOR), Some(Vector4::new(0.961, 0.871, 0.702, 1.0)));

    // a color followed by a texture draws textured, the color stays pushed
    dispatcher.set_texture(&mut shader, "floor");
    assert_eq!(shader.bool(names::USE_TEXTURE), Some(true));
    assert_eq!(shader.push_count(names::COLOR), 1);
}

#[test]
fn should_push_material_fields() {
    let (textures, materials) = (textures(), wood_only());
    let dispatcher = ShaderDispatcher::new(&textures, &materials);
    let mut shader = UniformStore::new();

    assert!(dispatcher.set_material(&mut shader, "wood"));

    assert_eq!(shader.vec3(names::MATERIAL_DIFFUSE), Some(Vector3::new(0.2, 0.2, 0.3)));
    assert_eq!(shader.vec3(names::MATERIAL_SPECULAR), Some(Vector3::new(0.0, 0.0, 0.0)));
    assert_eq!(shader.float(names::MATERIAL_SHININESS), Some(0.1));
}

#[test]
fn should_leave_material_alone_when_tag_is_unknown() {
    let (textures, materials) = (textures(), wood_only());
    let dispatcher = ShaderDispatcher::new(&textures, &materials);
    let mut shader = UniformStore::new();
    dispatcher.set_material(&mut shader, "wood");
    let before = shader.clone();

    assert!(!dispatcher.set_material(&mut shader, "nonexistent"));

    for name in [names::MATERIAL_DIFFUSE, names::MATERIAL_SPECULAR, names::MATERIAL_SHININESS] {
        assert_eq!(shader.get(name), before.get(name));
        assert_eq!(shader.push_count(name), 1);
    }
}

#[test]
fn should_ignore_materials_when_none_are_defined() {
    let textures = textures();
    let materials = MaterialRegistry::new();
    let dispatcher = ShaderDispatcher::new(&textures, &materials);
    let mut shader = UniformStore::new();

    assert!(!dispatcher.set_material(&mut shader, "wood"));
    assert_eq!(shader.iter().count(), 0);
}

#[test]
fn should_push_uv_scale() {
    let (textures, materials) = (textures(), wood_only());
    let dispatcher = ShaderDispatcher::new(&textures, &materials);
    let mut shader = UniformStore::new();

    dispatcher.set_uv_scale(&mut shader, 4.0, 4.0);

    assert_eq!(shader.vec2(names::UV_SCALE), Some(Vector2::new(4.0, 4.0)));
}

#[test]
fn should_fill_gpu_uniform_block() {
    let (textures, materials) = (textures(), wood_only());
    let dispatcher = ShaderDispatcher::new(&textures, &materials);
    let mut block = UniformBlock::default();

    let transform = Transform::placed([2.0, 2.0, 2.0], [0.0, 1.0, 0.0]);
    dispatcher.set_transform(&mut block, &transform);
    dispatcher.set_texture(&mut block, "metal");
    dispatcher.set_uv_scale(&mut block, 2.0, 1.0);
    dispatcher.set_material(&mut block, "wood");

    let model: [[f32; 4]; 4] = transform.to_matrix().into();
    assert_eq!(block.object.model, model);
    assert_eq!(block.object.use_texture, 1);
    assert_eq!(block.object.texture_slot, 2);
    assert_eq!(block.object.uv_scale, [2.0, 1.0]);
    assert_eq!(block.object.diffuse, [0.2, 0.2, 0.3]);
    assert_eq!(block.object.shininess, 0.1);
}
