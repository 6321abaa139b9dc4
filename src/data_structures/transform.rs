//! Model transforms for placed mesh instances.
//!
//! A [`Transform`] is the authored description of one placement: a
//! non-uniform scale, Euler rotations in degrees about X, Y and Z, and a
//! translation. It collapses into a single model matrix for the shader.

use cgmath::{Deg, Matrix4, Vector3};

/// Scale, Euler rotation (degrees) and translation of one mesh instance.
///
/// Stored as plain arrays so that scene data can be written as `const`
/// tables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: [f32; 3],
    /// Rotation about the X, Y and Z axes in degrees.
    pub rotation: [f32; 3],
    pub position: [f32; 3],
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: [1.0, 1.0, 1.0],
        rotation: [0.0, 0.0, 0.0],
        position: [0.0, 0.0, 0.0],
    };

    pub const fn new(scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> Self {
        Self {
            scale,
            rotation,
            position,
        }
    }

    /// Transform without rotation.
    pub const fn placed(scale: [f32; 3], position: [f32; 3]) -> Self {
        Self::new(scale, [0.0, 0.0, 0.0], position)
    }

    /// `T · Rz · Ry · Rx · S`
    ///
    /// Read right to left: the mesh is scaled first, then rotated about X,
    /// then Y, then Z, and finally moved into place.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let [sx, sy, sz] = self.scale;
        let [rx, ry, rz] = self.rotation;

        Matrix4::from_translation(Vector3::from(self.position))
            * Matrix4::from_angle_z(Deg(rz))
            * Matrix4::from_angle_y(Deg(ry))
            * Matrix4::from_angle_x(Deg(rx))
            * Matrix4::from_nonuniform_scale(sx, sy, sz)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Transform> for Matrix4<f32> {
    fn from(transform: Transform) -> Self {
        transform.to_matrix()
    }
}
