//! hello-gl engine crate.
//!
//! This crate owns the platform + OpenGL runtime pieces used by the triangle app.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
pub mod paint;
