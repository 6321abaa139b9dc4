//! Where everything in the room goes.
//!
//! Each group is drawn top to bottom. A placement only lists what it
//! changes; anything left out keeps the value of the draw before it.

use crate::data_structures::{
    mesh::{DrawFlags, MeshKind},
    transform::Transform,
};

use super::{Placement, SceneGroup};

use MeshKind::*;

const fn at(scale: [f32; 3], position: [f32; 3]) -> Transform {
    Transform::placed(scale, position)
}

const fn turned(scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> Transform {
    Transform::new(scale, rotation, position)
}

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const SNOW: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
const COAL: [f32; 4] = [0.01, 0.01, 0.01, 1.0];
const TERRACOTTA: [f32; 4] = [0.961, 0.871, 0.702, 1.0];

const BACK_WALL: &[Placement] = &[Placement::new(
    Plane,
    turned([20.0, 1.0, 8.0], [90.0, 0.0, 0.0], [0.0, 8.0, -10.0]),
)
.texture("shiplap")];

const LOG_SCALE: [f32; 3] = [0.3, 3.5, 0.3];

const FIREBOX: &[Placement] = &[
    // brick back and angled sides
    Placement::new(Plane, turned([3.5, 6.0, 3.0], [90.0, 0.0, 0.0], [0.0, 3.0, -7.5])).texture("brick"),
    Placement::new(Plane, turned([3.0, 0.0, 3.0], [90.0, 70.0, 0.0], [-2.4, 3.0, -6.84])).texture("brick"),
    Placement::new(Plane, turned([3.0, 0.0, 3.0], [90.0, -70.0, 0.0], [2.4, 3.0, -6.84])).texture("brick"),
    // hearth floor and lintel
    Placement::new(Box, at([6.5, 1.0, 5.0], [0.0, 0.5, -7.0])).texture("metal").material("metal"),
    Placement::new(Box, at([6.5, 1.0, 5.0], [0.0, 5.5, -7.0])).texture("metal").material("metal"),
    // front frame
    Placement::new(Box, at([7.0, 1.0, 0.45], [0.0, 0.5, -4.3])).texture("metal2").material("metal"),
    Placement::new(Box, at([7.0, 1.0, 0.45], [0.0, 5.5, -4.3])).texture("metal2").material("metal"),
    Placement::new(Box, turned([5.0, 0.1, 0.45], [0.0, 0.0, 90.0], [-3.2, 3.5, -4.3])).texture("metal2").material("metal"),
    Placement::new(Box, turned([5.0, 0.1, 0.45], [0.0, 0.0, 90.0], [3.2, 3.5, -4.3])).texture("metal2").material("metal"),
    // andirons
    Placement::new(HalfTorus, turned([0.8, 0.2, 0.2], [0.0, 90.0, 180.0], [-1.5, 1.5, -6.0])).texture("metal2").material("metal"),
    Placement::new(HalfTorus, turned([0.5, 0.2, 0.2], [0.0, 90.0, 0.0], [-1.5, 1.0, -6.0])).texture("metal2").material("metal"),
    Placement::new(HalfTorus, turned([0.8, 0.2, 0.2], [0.0, 90.0, 180.0], [1.5, 1.5, -6.0])).texture("metal2").material("metal"),
    Placement::new(HalfTorus, turned([0.5, 0.2, 0.2], [0.0, 90.0, 0.0], [1.5, 1.0, -6.0])).texture("metal2").material("metal"),
    // logs: bark on the tube, growth rings on the caps
    Placement::new(Cylinder, turned(LOG_SCALE, [0.0, 0.0, 90.0], [1.8, 1.6, -5.6])).texture("bark").material("wood").flags(DrawFlags::SIDES_ONLY),
    Placement::again(Cylinder).texture("tree_end").material("wood").flags(DrawFlags::CAPS_ONLY),
    Placement::new(Cylinder, turned(LOG_SCALE, [0.0, 0.0, 90.0], [1.8, 1.6, -6.3])).texture("bark").material("wood").flags(DrawFlags::SIDES_ONLY),
    Placement::again(Cylinder).texture("tree_end").material("wood").flags(DrawFlags::CAPS_ONLY),
    Placement::new(Cylinder, turned(LOG_SCALE, [20.0, 0.0, 90.0], [1.8, 2.1, -6.5])).texture("bark").material("wood").flags(DrawFlags::SIDES_ONLY),
    Placement::again(Cylinder).texture("tree_end").material("wood").flags(DrawFlags::CAPS_ONLY),
];

const TREES: &[Placement] = &[
    // pot, rim, foliage
    Placement::new(Cylinder, at([0.25, 0.25, 0.25], [-4.5, 8.5, -2.75])).color(TERRACOTTA),
    Placement::new(Torus, turned([0.19, 0.19, 0.19], [90.0, 0.0, 0.0], [-4.5, 8.75, -2.75])).color(TERRACOTTA),
    Placement::new(Cone, at([0.5, 2.5, 0.5], [-4.5, 8.75, -2.75])).color([0.1, 0.1, 0.1, 1.0]).texture("leaf").uv_scale(4.0, 4.0),
    Placement::new(Cylinder, at([0.25, 0.25, 0.25], [4.5, 8.5, -2.75])).color(TERRACOTTA),
    Placement::new(Torus, turned([0.19, 0.19, 0.19], [90.0, 0.0, 0.0], [4.5, 8.75, -2.75])).color(TERRACOTTA),
    Placement::new(Cone, at([0.5, 2.5, 0.5], [4.5, 8.75, -2.75])).color([0.1, 0.1, 0.1, 1.0]).texture("leaf").uv_scale(4.0, 4.0),
];

const WOODEN_BOWL: &[Placement] = &[
    Placement::new(Torus, turned([1.35, 0.4, 0.4], [90.0, 0.0, 0.0], [0.0, 8.75, -2.9])).texture("rusticwood").material("wood"),
    Placement::new(HalfSphere, turned([1.7, 0.2, 0.5], [180.0, 0.0, 0.0], [0.0, 8.7, -2.9])).texture("rusticwood").material("wood"),
];

const ROOM: &[Placement] = &[
    // floor
    Placement::new(Plane, at([20.0, 1.0, 10.0], [0.0, 0.0, 0.0])).texture("floor").uv_scale(1.0, 1.0),
    // baseboards
    Placement::new(Box, at([40.0, 0.5, 0.1], [0.0, 0.25, -9.95])).color(WHITE).material("wood"),
    Placement::new(Box, turned([5.25, 0.5, 0.1], [0.0, 90.0, 0.0], [-6.03, 0.25, -6.87])).color(WHITE).material("wood"),
    Placement::new(Box, turned([5.25, 0.5, 0.1], [0.0, 90.0, 0.0], [6.03, 0.25, -6.87])).color(WHITE).material("wood"),
    // chimney breast above and beside the firebox
    Placement::new(Box, at([12.0, 10.0, 6.0], [0.0, 11.0, -7.0])).texture("shiplap").material("shiplap").uv_scale(2.0, 2.0),
    Placement::new(Box, at([2.75, 6.0, 6.0], [-4.6, 3.0, -7.0])).texture("shiplap").material("shiplap"),
    Placement::new(Box, at([2.75, 6.0, 6.0], [4.6, 3.0, -7.0])).texture("shiplap").material("shiplap"),
    // corner trim
    Placement::new(Box, at([0.5, 16.0, 0.5], [-5.9, 8.0, -4.0])).color(WHITE).material("wood"),
    Placement::new(Box, at([0.5, 16.0, 0.5], [5.9, 8.0, -4.0])).color(WHITE).material("wood"),
    Placement::new(Box, at([0.5, 16.0, 0.5], [-5.9, 8.0, -9.75])).color(WHITE).material("wood"),
    Placement::new(Box, at([0.5, 16.0, 0.5], [5.9, 8.0, -9.75])).color(WHITE).material("wood"),
    Placement::new(Box, at([10.0, 1.0, 2.0], [0.0, 8.0, -3.0])).texture("mantle").material("wood"),
    // television: bezel keeps the mantle's wood material
    Placement::new(Box, at([9.0, 5.0, 0.25], [0.0, 11.5, -3.6])).color([0.0, 0.0, 0.0, 1.0]),
    Placement::new(Box, at([8.75, 4.75, 0.25], [0.0, 11.5, -3.59])).color(COAL).material("metal").uv_scale(1.0, 1.0),
    // snowman
    Placement::new(Sphere, turned([0.21, 0.21, 0.17], [90.0, 0.0, 0.0], [-3.5, 8.6, -2.6])).color(SNOW).material("metal"),
    Placement::new(Sphere, turned([0.15, 0.15, 0.15], [90.0, 0.0, 0.0], [-3.5, 8.74, -2.6])).color(SNOW).material("metal"),
    Placement::new(Sphere, turned([0.11, 0.11, 0.11], [90.0, 0.0, 0.0], [-3.5, 8.87, -2.6])).color(SNOW).material("metal"),
    Placement::new(Cylinder, at([0.09, 0.13, 0.09], [-3.5, 8.94, -2.6])).color(COAL).material("metal"),
    Placement::new(Torus, turned([0.1, 0.1, 0.03], [90.0, 0.0, 0.0], [-3.5, 8.94, -2.6])).color(COAL).material("metal"),
];

/// The whole scene in draw order.
pub const SCENE: &[SceneGroup] = &[
    SceneGroup::new("wall", BACK_WALL),
    SceneGroup::new("firebox", FIREBOX),
    SceneGroup::new("trees", TREES),
    SceneGroup::new("wooden bowl", WOODEN_BOWL),
    SceneGroup::new("room", ROOM),
];
