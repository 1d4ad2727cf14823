//! Wireframe Core Types
//!
//! This crate provides the foundational value types for wireframe shape
//! detection. It includes:
//!
//! - **Geometry**: Grid coordinates and inclusive rectangles
//!   ([`geometry::Position`], [`geometry::Bounds`])
//! - **Frames**: The traced box tree produced by shape detection
//!   ([`frame::Frame`])

pub mod frame;
pub mod geometry;

pub use frame::{Frame, count_frames, flatten_frames};
pub use geometry::{Bounds, Position};
