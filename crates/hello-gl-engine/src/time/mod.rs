//! Time subsystem.
//!
//! Frame statistics for the render loop, kept free of any runtime coupling so
//! they can be driven with synthetic timestamps.

mod frame_stats;

pub use frame_stats::{FrameReport, FrameStats};
