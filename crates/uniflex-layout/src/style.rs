//! Authored Layout Style
//!
//! What the tree owner (or an inspector) writes. The passes only ever read a
//! [`LayoutStyle::sanitized`] copy, so out-of-range values are tolerated.

use serde::{Deserialize, Serialize};

use crate::box_model::{Axis, EdgeSizes};

/// How a node's width or height is determined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeMode {
    /// Sized from content
    #[default]
    Auto,
    /// Fixed pixel length
    Fixed,
    /// Fraction of the parent's content length
    Percent,
}

/// Flex direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlexDirection {
    #[default]
    Horizontal,
    Vertical,
    HorizontalReversed,
    VerticalReversed,
}

impl FlexDirection {
    pub fn axis(&self) -> Axis {
        match self {
            Self::Horizontal | Self::HorizontalReversed => Axis::Horizontal,
            Self::Vertical | Self::VerticalReversed => Axis::Vertical,
        }
    }

    pub fn is_reversed(&self) -> bool {
        matches!(self, Self::HorizontalReversed | Self::VerticalReversed)
    }
}

/// Authored layout configuration of one node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    /// Sized by the environment instead of a parent
    pub root: bool,
    pub width_mode: SizeMode,
    pub width: i32,
    pub width_percent: f32,
    pub height_mode: SizeMode,
    pub height: i32,
    pub height_percent: f32,
    /// May consume leftover main-axis space
    pub grow: bool,
    pub grow_factor: f32,
    /// May be reduced below its expected size
    pub shrink: bool,
    pub direction: FlexDirection,
    pub margin: EdgeSizes,
    pub padding: EdgeSizes,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            root: false,
            width_mode: SizeMode::Auto,
            width: 0,
            width_percent: 0.0,
            height_mode: SizeMode::Auto,
            height: 0,
            height_percent: 0.0,
            grow: true,
            grow_factor: 1.0,
            shrink: true,
            direction: FlexDirection::Horizontal,
            margin: EdgeSizes::ZERO,
            padding: EdgeSizes::ZERO,
        }
    }
}

impl LayoutStyle {
    /// Style of a root container laying out along `direction`
    pub fn root(direction: FlexDirection) -> Self {
        Self {
            root: true,
            direction,
            ..Self::default()
        }
    }

    /// Non-growing node with a fixed width
    pub fn fixed_width(width: i32) -> Self {
        Self {
            width_mode: SizeMode::Fixed,
            width,
            grow: false,
            ..Self::default()
        }
    }

    /// Non-growing node with a fixed height
    pub fn fixed_height(height: i32) -> Self {
        Self {
            height_mode: SizeMode::Fixed,
            height,
            grow: false,
            ..Self::default()
        }
    }

    /// Growing node with the given weight
    pub fn growing(grow_factor: f32) -> Self {
        Self {
            grow: true,
            grow_factor,
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_margin(mut self, margin: EdgeSizes) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: EdgeSizes) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }

    /// Copy with every field clamped into range.
    ///
    /// Margin and padding only lose negative values here; the half-size cap
    /// needs a resolved size and is applied by the passes.
    pub fn sanitized(&self) -> Self {
        Self {
            width: self.width.max(0),
            height: self.height.max(0),
            width_percent: unit_fraction(self.width_percent),
            height_percent: unit_fraction(self.height_percent),
            grow_factor: non_negative(self.grow_factor),
            margin: non_negative_edges(self.margin),
            padding: non_negative_edges(self.padding),
            ..*self
        }
    }

    pub fn mode(&self, axis: Axis) -> SizeMode {
        match axis {
            Axis::Horizontal => self.width_mode,
            Axis::Vertical => self.height_mode,
        }
    }

    pub fn fixed(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn percent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width_percent,
            Axis::Vertical => self.height_percent,
        }
    }
}

fn unit_fraction(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

fn non_negative(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

fn non_negative_edges(edges: EdgeSizes) -> EdgeSizes {
    EdgeSizes {
        top: edges.top.max(0),
        bottom: edges.bottom.max(0),
        left: edges.left.max(0),
        right: edges.right.max(0),
    }
}
