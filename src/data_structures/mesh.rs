//! The primitive-mesh vocabulary.
//!
//! Geometry generation lives outside this crate behind [`MeshLibrary`]:
//! every shape is loaded once and can then be drawn any number of times
//! with whatever transform and appearance are current in the shader.

/// Primitive shapes the scene is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Plane,
    Box,
    Cylinder,
    Torus,
    HalfTorus,
    Sphere,
    HalfSphere,
    Cone,
}

impl MeshKind {
    pub const ALL: [MeshKind; 8] = [
        MeshKind::Plane,
        MeshKind::Box,
        MeshKind::Cylinder,
        MeshKind::Torus,
        MeshKind::HalfTorus,
        MeshKind::Sphere,
        MeshKind::HalfSphere,
        MeshKind::Cone,
    ];
}

/// Which parts of a capped shape get drawn. Only cylinders look at these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawFlags {
    pub top: bool,
    pub bottom: bool,
    pub sides: bool,
}

impl DrawFlags {
    pub const ALL: DrawFlags = DrawFlags {
        top: true,
        bottom: true,
        sides: true,
    };
    /// An open tube.
    pub const SIDES_ONLY: DrawFlags = DrawFlags {
        top: false,
        bottom: false,
        sides: true,
    };
    /// Just the two end discs.
    pub const CAPS_ONLY: DrawFlags = DrawFlags {
        top: true,
        bottom: true,
        sides: false,
    };
}

impl Default for DrawFlags {
    fn default() -> Self {
        Self::ALL
    }
}

pub trait MeshLibrary {
    /// Build the GPU geometry for `kind`. Called once per kind.
    fn load(&mut self, kind: MeshKind);

    /// Draw `kind` with the current shader state.
    fn draw(&mut self, kind: MeshKind, flags: DrawFlags);
}
