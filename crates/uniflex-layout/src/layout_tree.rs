//! Layout Tree
//!
//! Arena of layout nodes owned by the host. Topology and authored style
//! live here; the engine only reads them and overwrites each node's result.

use crate::box_model::{Point, Rect};
use crate::result::LayoutResult;
use crate::style::LayoutStyle;

/// Layout node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A node in the layout tree
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// Authored configuration
    pub style: LayoutStyle,
    /// Last applied layout
    pub result: LayoutResult,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Nearest root ancestor-or-self, kept current on every topology change
    owner: Option<NodeId>,
}

impl LayoutNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn owner(&self) -> Option<NodeId> {
        self.owner
    }
}

/// Tree mutation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("Unknown layout node {0:?}")]
    UnknownNode(NodeId),

    #[error("Node {0:?} cannot be its own child")]
    SelfParent(NodeId),

    #[error("Attaching {child:?} under {parent:?} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },
}

/// Layout tree - arena of nodes
#[derive(Debug, Default, Clone)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self { nodes: Vec::with_capacity(64) }
    }

    /// Create a detached node and return its id
    pub fn create_node(&mut self, style: LayoutStyle) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LayoutNode {
            style,
            result: LayoutResult::default(),
            parent: None,
            children: Vec::new(),
            owner: style.root.then_some(id),
        });
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn style(&self, id: NodeId) -> Option<&LayoutStyle> {
        self.get(id).map(|n| &n.style)
    }

    pub fn result(&self, id: NodeId) -> Option<&LayoutResult> {
        self.get(id).map(|n| &n.result)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// All children in order, nested roots included
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Children that take part in this node's layout.
    ///
    /// Nested roots are sized by their own environment and skipped.
    pub fn layout_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.style(*child).is_some_and(|s| !s.root))
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.style(id).is_some_and(|s| s.root)
    }

    /// Every node flagged as a root, in creation order
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.style.root)
            .map(|(i, _)| NodeId(i))
    }

    /// The root whose layout pass positions this node
    pub fn owning_root(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.owner)
    }

    /// Replace a node's authored style
    pub fn set_style(&mut self, id: NodeId, style: LayoutStyle) -> Result<(), TreeError> {
        self.update_style(id, |s| *s = style)
    }

    /// Edit a node's authored style in place
    pub fn update_style<F>(&mut self, id: NodeId, edit: F) -> Result<(), TreeError>
    where
        F: FnOnce(&mut LayoutStyle),
    {
        let node = self.nodes.get_mut(id.0).ok_or(TreeError::UnknownNode(id))?;
        let was_root = node.style.root;
        edit(&mut node.style);
        if node.style.root != was_root {
            self.refresh_owners(id);
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let index = self.children(parent).len();
        self.insert_child(parent, index, child)
    }

    /// Insert `child` at `index` among `parent`'s children.
    ///
    /// An index past the end appends. Reattaching under the same parent
    /// moves the child.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), TreeError> {
        self.check_attach(parent, child)?;
        self.unlink(child);

        let siblings = &mut self.nodes[parent.0].children;
        let index = index.min(siblings.len());
        siblings.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
        self.refresh_owners(child);
        Ok(())
    }

    /// Remove `child` from its parent. Detached nodes keep their subtree.
    pub fn detach(&mut self, child: NodeId) -> Result<(), TreeError> {
        if !self.contains(child) {
            return Err(TreeError::UnknownNode(child));
        }
        self.unlink(child);
        self.refresh_owners(child);
        Ok(())
    }

    /// Rect of a node in its owning root's frame
    pub fn absolute_rect(&self, id: NodeId) -> Option<Rect> {
        let owner = self.owning_root(id)?;
        let result = self.result(id)?;
        let mut origin = Point::ZERO;
        let mut current = id;
        while current != owner {
            let offset = self.result(current)?.offset;
            origin.x = origin.x.saturating_add(offset.x);
            origin.y = origin.y.saturating_add(offset.y);
            current = self.parent(current)?;
        }
        Some(Rect::from_parts(origin, result.size))
    }

    pub(crate) fn set_result(&mut self, id: NodeId, result: LayoutResult) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.result = result;
        }
    }

    fn check_attach(&self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownNode(parent));
        }
        if !self.contains(child) {
            return Err(TreeError::UnknownNode(child));
        }
        if parent == child {
            return Err(TreeError::SelfParent(child));
        }
        let mut ancestor = self.parent(parent);
        while let Some(a) = ancestor {
            if a == child {
                return Err(TreeError::CycleDetected { parent, child });
            }
            ancestor = self.parent(a);
        }
        Ok(())
    }

    fn unlink(&mut self, child: NodeId) {
        if let Some(old_parent) = self.nodes[child.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|c| *c != child);
        }
    }

    /// Recompute cached owners for `id` and everything below it
    fn refresh_owners(&mut self, id: NodeId) {
        let inherited = self.parent(id).and_then(|p| self.owning_root(p));
        let mut stack = vec![(id, inherited)];
        while let Some((current, from_parent)) = stack.pop() {
            let node = &mut self.nodes[current.0];
            node.owner = if node.style.root { Some(current) } else { from_parent };
            let owner = node.owner;
            stack.extend(node.children.iter().map(|c| (*c, owner)));
        }
    }
}
