//! Root Sizing
//!
//! Roots are sized by their host container, never by the engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uniflex_layout::{NodeId, Size};

/// Supplies the available size of a root
pub trait RootSizeSource {
    /// `None` when the root has no discoverable container
    fn root_size(&self, root: NodeId) -> Option<Size>;
}

/// Every root gets the same size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformSize(pub Size);

impl RootSizeSource for UniformSize {
    fn root_size(&self, _root: NodeId) -> Option<Size> {
        Some(self.0)
    }
}

impl<F> RootSizeSource for F
where
    F: Fn(NodeId) -> Option<Size>,
{
    fn root_size(&self, root: NodeId) -> Option<Size> {
        self(root)
    }
}

/// Rectangle anchored inside a parent container.
///
/// Anchors are fractions of the container. When min and max differ on an
/// axis the rectangle stretches with the container on that axis and
/// `size_delta` is added to the stretched length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchoredRect {
    pub anchor_min: [f32; 2],
    pub anchor_max: [f32; 2],
    pub size_delta: [f32; 2],
}

impl Default for AnchoredRect {
    fn default() -> Self {
        Self {
            anchor_min: [0.5, 0.5],
            anchor_max: [0.5, 0.5],
            size_delta: [0.0, 0.0],
        }
    }
}

impl AnchoredRect {
    /// Fixed-size rectangle, independent of the container
    pub fn fixed(width: f32, height: f32) -> Self {
        Self {
            size_delta: [width, height],
            ..Self::default()
        }
    }

    /// Rectangle covering the whole container
    pub fn stretch() -> Self {
        Self {
            anchor_min: [0.0, 0.0],
            anchor_max: [1.0, 1.0],
            size_delta: [0.0, 0.0],
        }
    }

    /// Size inside `container`, truncated to whole pixels
    pub fn resolve(&self, container: Size) -> Size {
        if self.anchor_min == self.anchor_max {
            return Size::new(self.size_delta[0] as i32, self.size_delta[1] as i32).non_negative();
        }
        let span_x = self.anchor_max[0] - self.anchor_min[0];
        let span_y = self.anchor_max[1] - self.anchor_min[1];
        Size::new(
            (self.size_delta[0] + container.width as f32 * span_x) as i32,
            (self.size_delta[1] + container.height as f32 * span_y) as i32,
        )
        .non_negative()
    }
}

/// Anchored rectangles per root inside one shared container
#[derive(Debug, Clone, Default)]
pub struct AnchoredRoots {
    container: Size,
    anchors: HashMap<NodeId, AnchoredRect>,
}

impl AnchoredRoots {
    pub fn new(container: Size) -> Self {
        Self {
            container,
            anchors: HashMap::new(),
        }
    }

    pub fn insert(&mut self, root: NodeId, rect: AnchoredRect) {
        self.anchors.insert(root, rect);
    }

    pub fn remove(&mut self, root: NodeId) -> Option<AnchoredRect> {
        self.anchors.remove(&root)
    }

    /// Host container resized
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
    }

    pub fn container(&self) -> Size {
        self.container
    }
}

impl RootSizeSource for AnchoredRoots {
    fn root_size(&self, root: NodeId) -> Option<Size> {
        self.anchors.get(&root).map(|rect| rect.resolve(self.container))
    }
}
