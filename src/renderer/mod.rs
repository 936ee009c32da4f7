//! WebGPU rendering module
//!
//! Sprites are tessellated on the CPU into colored triangles and drawn with a
//! single flat-color pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::SceneBuilder;
pub use vertex::Vertex;
