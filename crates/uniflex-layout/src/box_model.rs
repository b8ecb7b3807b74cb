//! Box Model
//!
//! Integer geometry shared by the passes. Coordinates grow right and down.

use serde::{Deserialize, Serialize};

/// A position relative to some parent frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Same size with negative components clamped to zero
    pub fn non_negative(self) -> Self {
        Self {
            width: self.width.max(0),
            height: self.height.max(0),
        }
    }

    /// Length along an axis
    pub fn main(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Length across an axis
    pub fn cross(&self, axis: Axis) -> i32 {
        self.main(axis.flip())
    }

    /// Build a size from main/cross lengths of `axis`
    pub fn from_axes(axis: Axis, main: i32, cross: i32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }
}

/// Rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by `edges`; width and height never go negative
    pub fn inset(&self, edges: EdgeSizes) -> Self {
        Self {
            x: self.x.saturating_add(edges.left),
            y: self.y.saturating_add(edges.top),
            width: self.width.saturating_sub(edges.horizontal()).max(0),
            height: self.height.saturating_sub(edges.vertical()).max(0),
        }
    }
}

/// Main axis of a flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Edge sizes (top, bottom, left, right)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSizes {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl EdgeSizes {
    pub const ZERO: Self = Self { top: 0, bottom: 0, left: 0, right: 0 };

    pub fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self { top, bottom, left, right }
    }

    pub fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Sum of both edges that bound `axis`
    pub fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Clamp every edge into `[0, half of size on that edge's axis]`
    pub fn clamp_to(&self, size: Size) -> Self {
        let half_w = size.width.max(0) / 2;
        let half_h = size.height.max(0) / 2;
        Self {
            top: self.top.clamp(0, half_h),
            bottom: self.bottom.clamp(0, half_h),
            left: self.left.clamp(0, half_w),
            right: self.right.clamp(0, half_w),
        }
    }

    /// Edge-wise sum
    pub fn plus(&self, other: EdgeSizes) -> Self {
        Self {
            top: self.top.saturating_add(other.top),
            bottom: self.bottom.saturating_add(other.bottom),
            left: self.left.saturating_add(other.left),
            right: self.right.saturating_add(other.right),
        }
    }

    /// Clamp edges so that each stays within half of `bare` grown by the
    /// clamped edges, which is the cap [`EdgeSizes::clamp_to`] applies to
    /// the grown size. Negative edges become zero.
    pub fn fit_around(&self, bare: Size) -> Self {
        let fit = |edge: i32, opposite: i32, length: i32| {
            edge.clamp(0, length.max(0).saturating_add(opposite.max(0)))
        };
        Self {
            top: fit(self.top, self.bottom, bare.height),
            bottom: fit(self.bottom, self.top, bare.height),
            left: fit(self.left, self.right, bare.width),
            right: fit(self.right, self.left, bare.width),
        }
    }

    /// `bare` grown by these edges on both axes
    pub fn grow(&self, bare: Size) -> Size {
        Size::new(
            bare.width.saturating_add(self.horizontal()),
            bare.height.saturating_add(self.vertical()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_half_size() {
        let edges = EdgeSizes::new(10000, -5, 30, 7);
        let clamped = edges.clamp_to(Size::new(50, 40));
        assert_eq!(clamped, EdgeSizes::new(20, 0, 25, 7));
    }

    #[test]
    fn test_clamp_odd_size_rounds_down() {
        let clamped = EdgeSizes::all(100).clamp_to(Size::new(5, 3));
        assert_eq!(clamped, EdgeSizes::new(1, 1, 2, 2));
    }

    #[test]
    fn test_fit_around_survives_clamp_to() {
        let bare = Size::new(20, 0);
        let margin = EdgeSizes::new(3, 0, 15, 0).fit_around(bare);
        assert_eq!(margin, EdgeSizes::new(0, 0, 15, 0));

        let grown = margin.grow(bare);
        assert_eq!(grown, Size::new(35, 0));
        assert_eq!(margin.clamp_to(grown), margin);
    }

    #[test]
    fn test_fit_around_caps_one_sided_edge() {
        let margin = EdgeSizes::new(0, 0, 50, 4).fit_around(Size::new(10, 0));
        assert_eq!(margin, EdgeSizes::new(0, 0, 14, 4));
        assert_eq!(margin.clamp_to(margin.grow(Size::new(10, 0))), margin);
    }

    #[test]
    fn test_edge_sums_saturate() {
        let edges = EdgeSizes::all(i32::MAX);
        assert_eq!(edges.horizontal(), i32::MAX);
        assert_eq!(edges.plus(edges).top, i32::MAX);
        assert_eq!(edges.grow(Size::new(1, 1)), Size::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn test_inset_never_negative() {
        let rect = Rect::new(0, 0, 10, 10);
        let inner = rect.inset(EdgeSizes::all(20));
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
        assert_eq!(inner.origin(), Point::new(20, 20));
    }

    #[test]
    fn test_size_axes() {
        let size = Size::from_axes(Axis::Vertical, 30, 10);
        assert_eq!(size, Size::new(10, 30));
        assert_eq!(size.main(Axis::Vertical), 30);
        assert_eq!(size.cross(Axis::Vertical), 10);
    }

    #[test]
    fn test_rect_contains_excludes_far_edge() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains(10, 10));
        assert!(!rect.contains(15, 10));
    }
}
