//! Topobrush - topological brush painting on triangle meshes
//!
//! This crate provides the computational core of the mesh painter:
//! - [`topology`] - Vertex-sharing triangle adjacency
//! - [`camera`] - Pure-data camera and its view/projection matrices
//! - [`raycast`] - Pointer-to-triangle picking (Moller-Trumbore)
//! - [`region`] - Bounded-radius expansion with a session-wide selection
//! - [`color`] - Per-vertex color buffer for GPU upload
//! - [`session`] - Session state owned by the application
//! - [`brush`] - Brush controller turning input events into recoloring
//!
//! Rendering, windowing, and mesh file parsing live outside this crate.

pub mod brush;
pub mod camera;
pub mod color;
pub mod constants;
pub mod raycast;
pub mod region;
pub mod session;
pub mod topology;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use brush::*;
pub use camera::*;
pub use color::*;
pub use constants::*;
pub use raycast::*;
pub use region::*;
pub use session::*;
pub use topology::*;
pub use types::*;
pub use validation::*;
