//! Scene pipelines: lit/textured meshes, the ground quad and the skybox.
//!
//! Every pipeline shares bind group 0 (`SceneUniforms`) and a depth
//! attachment in [`crate::gpu::DEPTH_FORMAT`].

mod ground;
mod mesh;
mod mesh_pipeline;
mod skybox;
mod sphere_cache;

pub use ground::*;
pub use mesh::*;
pub use mesh_pipeline::*;
pub use skybox::*;
pub use sphere_cache::*;
