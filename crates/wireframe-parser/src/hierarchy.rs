//! Containment-based hierarchy construction over traced frames.
//!
//! The hierarchy builder turns the flat list of successfully traced
//! frames into a forest: each frame becomes a child of its smallest
//! strict container, or a root when nothing contains it. Two frames
//! that overlap without containment make every tree touching them
//! ambiguous, so that configuration aborts the whole build with a
//! [`HierarchyError`].
//!
//! The builder works on bounds alone; it never looks at the grid.

use log::debug;
use thiserror::Error;

use wireframe_core::{Bounds, Frame};

use crate::error::{Diagnostic, ErrorCode};

/// Hard failure of a hierarchy build: two boxes overlap without either
/// containing the other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("boxes {first} and {second} overlap without containment")]
pub struct HierarchyError {
    first: Bounds,
    second: Bounds,
}

impl HierarchyError {
    /// Bounds of the first box of the offending pair, in trace order.
    pub fn first(&self) -> Bounds {
        self.first
    }

    /// Bounds of the second box of the offending pair.
    pub fn second(&self) -> Bounds {
        self.second
    }
}

impl From<HierarchyError> for Diagnostic {
    fn from(err: HierarchyError) -> Self {
        Diagnostic::from_code(ErrorCode::OverlappingBoxes {
            first: err.first,
            second: err.second,
        })
    }
}

/// Finds the immediate parent of `frames[index]`: the smallest-area
/// frame strictly containing it, or `None` for a root.
pub fn find_parent(index: usize, frames: &[Frame]) -> Option<usize> {
    let bounds = frames.get(index)?.bounds();
    frames
        .iter()
        .enumerate()
        .filter(|&(other, candidate)| other != index && candidate.bounds().contains(bounds))
        .min_by_key(|(_, candidate)| candidate.bounds().area())
        .map(|(other, _)| other)
}

/// Computes the nesting depth of `frames[index]` by repeated parent
/// lookup over the flat candidate list. Roots are depth 0.
pub fn depth_of(index: usize, frames: &[Frame]) -> usize {
    let mut depth = 0;
    let mut current = index;
    while let Some(parent) = find_parent(current, frames) {
        depth += 1;
        current = parent;
    }
    depth
}

/// Builds the forest from a flat list of traced frames.
///
/// Fails as a whole on the first pair of frames that overlap without
/// containment; otherwise every frame is attached to its immediate
/// container and the roots are returned in their original (trace)
/// order, as are the children of each parent.
pub fn build_hierarchy(frames: Vec<Frame>) -> Result<Vec<Frame>, HierarchyError> {
    for (i, first) in frames.iter().enumerate() {
        for second in frames.iter().skip(i + 1) {
            if first.bounds().overlaps_partially(second.bounds()) {
                return Err(HierarchyError {
                    first: first.bounds(),
                    second: second.bounds(),
                });
            }
        }
    }

    let parents: Vec<Option<usize>> = (0..frames.len())
        .map(|index| find_parent(index, &frames))
        .collect();
    let depths: Vec<usize> = (0..frames.len())
        .map(|index| depth_from_parents(index, &parents))
        .collect();

    debug!(frames = frames.len(), roots = parents.iter().filter(|p| p.is_none()).count();
        "building box hierarchy");

    // Attach deepest frames first so every parent is still in its slot
    // when its children move in; siblings keep their trace order.
    let mut order: Vec<usize> = (0..frames.len()).collect();
    order.sort_by(|&a, &b| depths[b].cmp(&depths[a]).then(a.cmp(&b)));

    let mut slots: Vec<Option<Frame>> = frames.into_iter().map(Some).collect();
    for &index in &order {
        let Some(parent) = parents[index] else {
            continue;
        };
        if let Some(child) = slots[index].take() {
            if let Some(parent_frame) = slots[parent].as_mut() {
                parent_frame.push_child(child);
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

fn depth_from_parents(index: usize, parents: &[Option<usize>]) -> usize {
    let mut depth = 0;
    let mut current = index;
    while let Some(parent) = parents[current] {
        depth += 1;
        current = parent;
    }
    depth
}

/// Collects deep-nesting warnings over a built forest.
///
/// Every frame whose depth strictly exceeds `threshold` produces one
/// [`ErrorCode::DeepNesting`] warning carrying its depth and top-left
/// corner. Roots are depth 0, so depths `0..=threshold` never warn.
pub fn collect_deep_nesting(roots: &[Frame], threshold: usize) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();
    for root in roots {
        collect_deep_nesting_into(root, 0, threshold, &mut warnings);
    }
    warnings
}

fn collect_deep_nesting_into(
    frame: &Frame,
    depth: usize,
    threshold: usize,
    warnings: &mut Vec<Diagnostic>,
) {
    if depth > threshold {
        warnings.push(Diagnostic::from_code(ErrorCode::DeepNesting {
            depth,
            position: frame.bounds().top_left(),
        }));
    }
    for child in frame.children() {
        collect_deep_nesting_into(child, depth + 1, threshold, warnings);
    }
}

/// Returns the maximum nesting depth across the forest: 0 for an empty
/// forest or one of childless roots.
pub fn max_depth(roots: &[Frame]) -> usize {
    fn node_depth(frame: &Frame, depth: usize) -> usize {
        frame
            .children()
            .iter()
            .map(|child| node_depth(child, depth + 1))
            .max()
            .unwrap_or(depth)
    }

    roots
        .iter()
        .map(|root| node_depth(root, 0))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use wireframe_core::Position;

    use super::*;

    fn frame(top: usize, left: usize, bottom: usize, right: usize) -> Frame {
        Frame::new(None, Bounds::new(top, left, bottom, right))
    }

    /// Builds a chain of concentric frames, outermost first.
    fn nested_chain(levels: usize) -> Vec<Frame> {
        (0..levels)
            .map(|i| frame(i, i, 100 - i, 100 - i))
            .collect()
    }

    #[test]
    fn test_find_parent_innermost() {
        let frames = vec![
            frame(0, 0, 20, 20),
            frame(2, 2, 10, 10),
            frame(4, 4, 8, 8),
        ];

        // The smallest container wins, not just any ancestor.
        assert_eq!(find_parent(2, &frames), Some(1));
        assert_eq!(find_parent(1, &frames), Some(0));
        assert_eq!(find_parent(0, &frames), None);
    }

    #[test]
    fn test_find_parent_same_bounds_is_none() {
        // Identical bounds are not strict containers of each other.
        let frames = vec![frame(0, 0, 5, 5), frame(0, 0, 5, 5)];
        assert_eq!(find_parent(0, &frames), None);
        assert_eq!(find_parent(1, &frames), None);
    }

    #[test]
    fn test_depth_of() {
        let frames = nested_chain(3);
        assert_eq!(depth_of(0, &frames), 0);
        assert_eq!(depth_of(1, &frames), 1);
        assert_eq!(depth_of(2, &frames), 2);
    }

    #[test]
    fn test_build_hierarchy_disjoint_roots() {
        let roots = build_hierarchy(vec![frame(0, 0, 4, 4), frame(0, 10, 4, 14)])
            .expect("disjoint boxes build");

        assert_eq!(roots.len(), 2);
        assert!(roots.iter().all(|r| r.children().is_empty()));
    }

    #[test]
    fn test_build_hierarchy_three_levels() {
        let roots = build_hierarchy(nested_chain(3)).expect("nested boxes build");

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].children().len(), 1);
        assert_eq!(roots[0].children()[0].children().len(), 1);
        assert_eq!(wireframe_core::count_frames(&roots), 3);
    }

    #[test]
    fn test_build_hierarchy_sibling_order() {
        let roots = build_hierarchy(vec![
            frame(0, 0, 20, 40),
            frame(2, 22, 6, 30),
            frame(2, 2, 6, 10),
        ])
        .expect("siblings build");

        assert_eq!(roots.len(), 1);
        // Children keep their trace order, not a spatial order.
        let lefts: Vec<usize> = roots[0]
            .children()
            .iter()
            .map(|c| c.bounds().left())
            .collect();
        assert_eq!(lefts, vec![22, 2]);
    }

    #[test]
    fn test_build_hierarchy_overlap_aborts() {
        let err = build_hierarchy(vec![frame(0, 0, 5, 5), frame(3, 3, 8, 8)])
            .expect_err("partial overlap must abort");

        assert_eq!(err.first(), Bounds::new(0, 0, 5, 5));
        assert_eq!(err.second(), Bounds::new(3, 3, 8, 8));

        let diag: Diagnostic = err.into();
        assert!(diag.severity().is_error());
    }

    #[test]
    fn test_deep_nesting_threshold_boundary() {
        // Depths 0..=4 never warn with the default threshold of 4.
        let roots = build_hierarchy(nested_chain(5)).expect("chain builds");
        assert!(collect_deep_nesting(&roots, 4).is_empty());

        // One more level is exactly one warning, at depth 5.
        let roots = build_hierarchy(nested_chain(6)).expect("chain builds");
        let warnings = collect_deep_nesting(&roots, 4);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].code(),
            &ErrorCode::DeepNesting {
                depth: 5,
                position: Position::new(5, 5),
            }
        );
    }

    #[test]
    fn test_max_depth() {
        assert_eq!(max_depth(&[]), 0);
        assert_eq!(max_depth(&[frame(0, 0, 2, 2)]), 0);

        let roots = build_hierarchy(nested_chain(4)).expect("chain builds");
        assert_eq!(max_depth(&roots), 3);
    }

    #[test]
    fn test_structural_depth_matches_flat_depth() {
        // depth_of over the flat list and the built tree's structural
        // depth must agree by construction.
        let frames = nested_chain(4);
        let flat_depths: Vec<usize> = (0..frames.len()).map(|i| depth_of(i, &frames)).collect();
        let roots = build_hierarchy(frames).expect("chain builds");

        assert_eq!(flat_depths, vec![0, 1, 2, 3]);
        assert_eq!(max_depth(&roots), 3);
    }
}
