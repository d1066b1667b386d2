//! WebGPU rendering module
//!
//! CPU-tessellated colored quads drawn through a single flat-color pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene_vertices;
pub use vertex::Vertex;
