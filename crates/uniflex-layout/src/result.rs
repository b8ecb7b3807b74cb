//! Layout Results
//!
//! Computed state, written only by the passes and overwritten every time.

use std::collections::HashMap;

use crate::box_model::{EdgeSizes, Point, Rect, Size};
use crate::NodeId;

/// Geometry computed for one node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutResult {
    /// Position relative to the parent's resolved rect origin
    pub offset: Point,
    /// Final size after distribution
    pub size: Size,
    /// Measured size, margins included
    pub expected: Size,
    /// Main-axis length granted before leftover grow space is added
    pub allocated_main: i32,
    /// Margin edges actually applied
    pub margin: EdgeSizes,
    /// Padding edges actually applied
    pub padding: EdgeSizes,
}

impl LayoutResult {
    /// Rect in the parent's frame
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.offset, self.size)
    }

    /// Area children are laid out in, relative to this node's origin
    pub fn content_rect(&self) -> Rect {
        Rect::from_parts(Point::ZERO, self.size).inset(self.margin.plus(self.padding))
    }
}

/// Results of one layout pass over a root's subtree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutResults {
    entries: HashMap<NodeId, LayoutResult>,
}

impl LayoutResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NodeId) -> Option<&LayoutResult> {
        self.entries.get(&id)
    }

    pub(crate) fn entry(&mut self, id: NodeId) -> &mut LayoutResult {
        self.entries.entry(id).or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &LayoutResult)> {
        self.entries.iter().map(|(id, result)| (*id, result))
    }
}
