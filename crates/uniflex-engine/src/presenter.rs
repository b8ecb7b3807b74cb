//! Presentation
//!
//! The engine never draws. A presenter receives each laid-out node's rect
//! and paints it however the host does rectangles.

use uniflex_layout::{LayoutTree, NodeId, Rect};

/// Consumer of laid-out rectangles
pub trait Presenter {
    /// `rect` is in the owning root's frame; `depth` is 0 for the root
    fn draw_rect(&mut self, node: NodeId, rect: Rect, depth: usize);
}

impl Presenter for Vec<(NodeId, Rect)> {
    fn draw_rect(&mut self, node: NodeId, rect: Rect, _depth: usize) {
        self.push((node, rect));
    }
}

/// Walk `root`'s layout pre-order, in child order, handing rects to
/// `presenter`. Returns the number of nodes presented.
pub fn present<P: Presenter + ?Sized>(tree: &LayoutTree, root: NodeId, presenter: &mut P) -> usize {
    let mut stack = vec![(root, 0_usize)];
    let mut count = 0;
    while let Some((node, depth)) = stack.pop() {
        let Some(rect) = tree.absolute_rect(node) else {
            continue;
        };
        presenter.draw_rect(node, rect, depth);
        count += 1;
        let children: Vec<NodeId> = tree.layout_children(node).collect();
        stack.extend(children.into_iter().rev().map(|c| (c, depth + 1)));
    }
    count
}
