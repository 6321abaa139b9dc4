//! hearth
//!
//! Resource and shader-state management for a static, hand-authored
//! fireside room. Textures and materials are registered under string tags,
//! every mesh instance is described by a transform plus an appearance, and
//! the dispatcher turns that description into named uniform pushes.
//!
//! High-level modules
//! - `context`: configuration and a headless WGPU device
//! - `data_structures`: transforms, materials, lights, meshes and GPU textures
//! - `dispatch`: per-draw shader state (transform, color, texture, material)
//! - `error`: typed texture loading errors
//! - `pipelines`: uniform buffer layouts for the shading stage
//! - `resources`: image decoding and the tagged texture registry
//! - `scene`: the authored room and the manager that prepares and draws it
//! - `shader`: the named-uniform interface and an in-memory implementation
//!

pub mod context;
pub mod data_structures;
pub mod dispatch;
pub mod error;
pub mod pipelines;
pub mod resources;
pub mod scene;
pub mod shader;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::{Matrix4, Vector2, Vector3, Vector4};
pub use context::{GpuContext, SceneConfig};
pub use dispatch::ShaderDispatcher;
pub use error::TextureError;
pub use scene::{Placement, SceneManager};
pub use shader::ShaderManager;
