//! The traced box tree produced by wireframe shape detection.
//!
//! A [`Frame`] is one rectangular region recovered from the character
//! grid: its inclusive bounds, the optional name embedded in its top
//! border, and the frames nested inside it. The forest of root frames
//! is the terminal output of shape detection and is what a downstream
//! content parser walks to populate UI elements.

use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;

/// A traced rectangular region with optional name and nested children.
///
/// A frame exclusively owns its children; there are no parent pointers,
/// so the forest is a plain tree. When ancestry is needed it is
/// recomputed by searching the candidate set rather than stored, which
/// keeps ownership acyclic.
///
/// Frames are created without children by the box tracer and populated
/// by the hierarchy builder; after that the forest is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    name: Option<String>,
    bounds: Bounds,
    children: Vec<Frame>,
}

impl Frame {
    /// Creates a frame with no children.
    pub fn new(name: Option<String>, bounds: Bounds) -> Self {
        Self {
            name,
            bounds,
            children: Vec::new(),
        }
    }

    /// Returns the name extracted from the top border, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the inclusive bounds of the frame.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the directly nested frames.
    pub fn children(&self) -> &[Frame] {
        &self.children
    }

    /// Appends a directly nested frame.
    pub fn push_child(&mut self, child: Frame) {
        self.children.push(child);
    }
}

/// Counts every frame in the forest, including nested ones.
///
/// # Examples
///
/// ```
/// # use wireframe_core::{Bounds, Frame, count_frames};
/// let mut root = Frame::new(None, Bounds::new(0, 0, 8, 8));
/// root.push_child(Frame::new(None, Bounds::new(2, 2, 5, 5)));
/// assert_eq!(count_frames(&[root]), 2);
/// ```
pub fn count_frames(roots: &[Frame]) -> usize {
    roots
        .iter()
        .map(|frame| 1 + count_frames(frame.children()))
        .sum()
}

/// Flattens the forest depth-first, parents before their children.
pub fn flatten_frames(roots: &[Frame]) -> Vec<&Frame> {
    let mut flat = Vec::new();
    for frame in roots {
        flat.push(frame);
        flat.extend(flatten_frames(frame.children()));
    }
    flat
}
