//! GL resource helpers.
//!
//! Thin wrappers over glow for the objects a draw call needs: shader
//! programs, vertex buffers and vertex array layouts.
//!
//! Every function here issues GL calls and expects the context it is given
//! to be current on the calling thread. `device::GlContext` guarantees that
//! for the lifetime of the context it hands out.

mod buffer;
mod shader;
mod vertex;

pub use buffer::{VertexArray, VertexBuffer};
pub use shader::{compile_shader, Program, ShaderError, ShaderStage};
pub use vertex::{Vertex2, VertexAttribute};
