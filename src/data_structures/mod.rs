//! Scene data types.
//!
//! - `transform` is the scale, rotation and translation of one mesh instance
//! - `material` holds tagged surface parameters and their registry
//! - `light` contains the directional and point light rig
//! - `mesh` names the primitive shapes and the library that draws them
//! - `texture` contains the GPU texture wrapper and creation utilities

pub mod light;
pub mod material;
pub mod mesh;
pub mod texture;
pub mod transform;
