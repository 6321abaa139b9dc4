//! GPU-side layouts of the shader interface.

pub mod uniforms;
