//! Engine - Layout triggers
//!
//! Owns the layout tree and decides when roots are re-laid-out: at start,
//! every frame for controlled roots, or on explicit request.

use uniflex_layout::{LayoutTree, NodeId, Size, TreeError};

use crate::presenter::{self, Presenter};
use crate::root_size::{AnchoredRoots, RootSizeSource};
use crate::Config;

/// Layout host for one tree
pub struct Engine<S: RootSizeSource> {
    config: Config,
    tree: LayoutTree,
    sizes: S,
    /// Roots re-laid-out every frame, in registration order
    controllers: Vec<NodeId>,
    frame: u64,
}

impl Engine<AnchoredRoots> {
    /// Engine whose roots are anchored inside `config.container_size`
    pub fn anchored(config: Config, tree: LayoutTree) -> Self {
        let sizes = AnchoredRoots::new(config.container_size);
        Self::new(config, tree, sizes)
    }
}

impl<S: RootSizeSource> Engine<S> {
    /// Create a new engine with the given configuration
    pub fn new(config: Config, tree: LayoutTree, sizes: S) -> Self {
        tracing::info!("Uniflex engine {} initialized", crate::VERSION);
        Self {
            config,
            tree,
            sizes,
            controllers: Vec::new(),
            frame: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    /// Mutable tree for the host or an inspector. Edits take effect on the
    /// next trigger.
    pub fn tree_mut(&mut self) -> &mut LayoutTree {
        &mut self.tree
    }

    pub fn sizes(&self) -> &S {
        &self.sizes
    }

    pub fn sizes_mut(&mut self) -> &mut S {
        &mut self.sizes
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Register `root` for per-frame re-layout
    pub fn add_controller(&mut self, root: NodeId) -> Result<(), EngineError> {
        if !self.tree.contains(root) {
            return Err(TreeError::UnknownNode(root).into());
        }
        if !self.tree.is_root(root) {
            return Err(EngineError::NotARoot(root));
        }
        if !self.controllers.contains(&root) {
            self.controllers.push(root);
        }
        Ok(())
    }

    pub fn remove_controller(&mut self, root: NodeId) -> bool {
        let before = self.controllers.len();
        self.controllers.retain(|r| *r != root);
        self.controllers.len() != before
    }

    pub fn controllers(&self) -> &[NodeId] {
        &self.controllers
    }

    /// Initialization trigger
    pub fn start(&mut self) {
        if !self.config.layout_on_start {
            return;
        }
        for root in self.controllers.clone() {
            self.relayout(root);
        }
    }

    /// One host frame. Returns how many roots were laid out.
    pub fn tick(&mut self) -> usize {
        self.frame += 1;
        if !self.config.relayout_every_frame {
            return 0;
        }
        let mut count = 0;
        for root in self.controllers.clone() {
            // A controller whose node stopped being a root does nothing.
            if self.tree.is_root(root) {
                self.relayout(root);
                count += 1;
            }
        }
        count
    }

    /// Re-derive `root`'s size from its container and lay it out fully
    pub fn refixup(&mut self, root: NodeId) -> Result<(), EngineError> {
        if !self.tree.contains(root) {
            return Err(TreeError::UnknownNode(root).into());
        }
        if !self.tree.is_root(root) {
            return Err(EngineError::NotARoot(root));
        }
        self.relayout(root);
        Ok(())
    }

    /// Re-lay-out whichever root owns `node`.
    ///
    /// Returns the root laid out, or `None` when `node` belongs to no root.
    pub fn request_layout(&mut self, node: NodeId) -> Option<NodeId> {
        let Some(root) = self.tree.owning_root(node) else {
            tracing::debug!(?node, "layout requested for a node without a root");
            return None;
        };
        self.relayout(root);
        Some(root)
    }

    /// "Layout now": every root in the tree. Returns how many were laid out.
    pub fn layout_now(&mut self) -> usize {
        let roots: Vec<NodeId> = self.tree.roots().collect();
        for root in &roots {
            self.relayout(*root);
        }
        roots.len()
    }

    /// Hand every node of `root`'s layout to `presenter`
    pub fn present<P: Presenter + ?Sized>(&self, root: NodeId, presenter: &mut P) -> usize {
        presenter::present(&self.tree, root, presenter)
    }

    fn relayout(&mut self, root: NodeId) {
        let size = self.sizes.root_size(root).unwrap_or_else(|| {
            tracing::warn!(?root, "root has no size source, laying out as empty");
            Size::ZERO
        });
        tracing::debug!(?root, ?size, frame = self.frame, "relayout");
        self.tree.layout_root(root, size.width, size.height);
    }
}

/// Engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Node {0:?} is not a root")]
    NotARoot(NodeId),
}
