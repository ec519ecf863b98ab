//! WebGPU rendering module
//!
//! Flat-colored triangle lists: circles are tessellated on the CPU each
//! frame and pushed through one alpha-blended pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::world_vertices;
pub use vertex::Vertex;
