//! OpenGL device: window surface + context management.
//!
//! This module is responsible for:
//! - creating the window together with a matching GL config
//! - creating the GL context and making it current on the window surface
//! - loading GL function pointers into a `glow::Context`
//! - swapping buffers and resizing the surface

mod context;
mod error;
mod info;
mod init;

pub use context::GlContext;
pub use error::DeviceError;
pub use info::ContextInfo;
pub use init::{GlInit, GlProfile, GlVersion};
