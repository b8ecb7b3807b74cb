//! Uniflex Layout Engine
//!
//! Flexbox-inspired layout over a tree of rectangular nodes.
//!
//! A layout pass runs from a root whose size comes from the environment:
//! - Measure: bottom-up expected sizes from each node's sizing mode
//! - Distribute: top-down split of each node's content length among its
//!   children, then recursive placement
//!
//! Every pass recomputes the whole root subtree. There is no dirty tracking.

mod box_model;
mod distribute;
mod layout_tree;
mod measure;
mod result;
mod style;

pub use box_model::{Axis, EdgeSizes, Point, Rect, Size};
pub use layout_tree::{LayoutNode, LayoutTree, NodeId, TreeError};
pub use result::{LayoutResult, LayoutResults};
pub use style::{FlexDirection, LayoutStyle, SizeMode};

/// Compute the layout of `root`'s subtree without touching the tree.
///
/// `root` must be flagged as a root; anything else yields empty results.
/// Negative available lengths are treated as zero.
pub fn compute_layout(tree: &LayoutTree, root: NodeId, available: Size) -> LayoutResults {
    let mut results = LayoutResults::new();
    if !tree.is_root(root) {
        tracing::warn!(?root, "layout requested for a node that is not a root");
        return results;
    }

    let axis = tree
        .style(root)
        .map_or(Axis::Horizontal, |style| style.direction.axis());
    let available = available.non_negative();
    measure::measure(tree, root, Axis::Horizontal, &mut results);
    distribute::place(tree, root, available, Point::ZERO, &mut results);
    results.entry(root).allocated_main = available.main(axis);

    tracing::debug!(?root, nodes = results.len(), ?available, "layout computed");
    results
}

impl LayoutTree {
    /// Lay out `root` and its subtree inside the given size.
    ///
    /// Only nodes positioned by this root are written; nested roots and the
    /// rest of the forest keep their results.
    pub fn layout_root(&mut self, root: NodeId, available_width: i32, available_height: i32) {
        let results = compute_layout(self, root, Size::new(available_width, available_height));
        self.apply(&results);
        tracing::info!("Layout complete: {} nodes under {:?}", results.len(), root);
    }

    /// Write computed results back onto their nodes
    pub fn apply(&mut self, results: &LayoutResults) {
        for (id, result) in results.iter() {
            self.set_result(id, *result);
        }
    }
}
