//! Distribute Pass
//!
//! Top-down placement. Each node splits its content length among the
//! children that take part in its layout: non-growing children are
//! satisfied first, growing children second, both greedily in source order,
//! and whatever is left is shared among growing children by grow factor.

use crate::box_model::{Axis, EdgeSizes, Point, Size};
use crate::result::LayoutResults;
use crate::style::{FlexDirection, LayoutStyle, SizeMode};
use crate::{LayoutTree, NodeId};

/// One child's share of its parent's main axis
#[derive(Debug)]
struct Slot {
    id: NodeId,
    grow: bool,
    grow_factor: f32,
    shrink: bool,
    expected: i32,
    granted: i32,
}

/// Record `size` and `offset` for `id`, then lay out its children.
pub(crate) fn place(
    tree: &LayoutTree,
    id: NodeId,
    size: Size,
    offset: Point,
    results: &mut LayoutResults,
) {
    let Some(style) = tree.style(id).map(LayoutStyle::sanitized) else {
        return;
    };

    let size = size.non_negative();
    let margin = style.margin.clamp_to(size);
    let padding = style.padding.clamp_to(size);
    {
        let result = results.entry(id);
        result.offset = offset;
        result.size = size;
        result.margin = margin;
        result.padding = padding;
    }
    tracing::trace!(?id, ?offset, ?size, "placed");

    let axis = style.direction.axis();
    let edges = margin.plus(padding);
    let content_main = size.main(axis).saturating_sub(edges.along(axis)).max(0);
    let content_cross = size.cross(axis).saturating_sub(edges.along(axis.flip())).max(0);

    let mut slots = collect_slots(tree, id, axis, size.main(axis), results);
    if slots.is_empty() {
        return;
    }

    let mut remaining = content_main;
    for slot in slots.iter_mut().filter(|s| !s.grow) {
        slot.granted = satisfy(slot.expected, slot.shrink, &mut remaining);
    }
    let mut total_factor = 0.0_f64;
    for slot in slots.iter_mut().filter(|s| s.grow) {
        slot.granted = satisfy(slot.expected, slot.shrink, &mut remaining);
        total_factor += f64::from(slot.grow_factor);
    }
    let leftover = remaining;

    let (mut cursor, cross_origin) = content_origin(style.direction, size, edges);
    let reversed = style.direction.is_reversed();
    for slot in &slots {
        let main = if slot.grow {
            slot.granted
                .saturating_add(grow_share(leftover, total_factor, slot.grow_factor))
        } else {
            slot.granted
        };

        let child_offset = if reversed {
            cursor = cursor.saturating_sub(main);
            point_on(axis, cursor, cross_origin)
        } else {
            let at = point_on(axis, cursor, cross_origin);
            cursor = cursor.saturating_add(main);
            at
        };

        results.entry(slot.id).allocated_main = slot.granted;
        let child_size = Size::from_axes(axis, main, content_cross);
        place(tree, slot.id, child_size, child_offset, results);
    }
}

/// Gather children with their expected main length, resolving percent
/// lengths of non-growing children against the parent's full `main_length`.
fn collect_slots(
    tree: &LayoutTree,
    id: NodeId,
    axis: Axis,
    main_length: i32,
    results: &mut LayoutResults,
) -> Vec<Slot> {
    let mut slots = Vec::new();
    for child in tree.layout_children(id) {
        let Some(style) = tree.style(child).map(LayoutStyle::sanitized) else {
            continue;
        };
        let result = results.entry(child);
        if !style.grow && style.mode(axis) == SizeMode::Percent {
            let resolved = (f64::from(main_length) * f64::from(style.percent(axis))) as i32;
            result.expected = Size::from_axes(axis, resolved, result.expected.cross(axis));
        }
        slots.push(Slot {
            id: child,
            grow: style.grow,
            grow_factor: style.grow_factor,
            shrink: style.shrink,
            expected: result.expected.main(axis),
            granted: 0,
        });
    }
    slots
}

/// Grant `expected` if it fits, otherwise the remainder (shrinking) or the
/// full length (overflowing). Running out always empties the pool.
fn satisfy(expected: i32, shrink: bool, remaining: &mut i32) -> i32 {
    if *remaining >= expected {
        *remaining -= expected;
        expected
    } else {
        let granted = if shrink { *remaining } else { expected };
        *remaining = 0;
        granted
    }
}

fn grow_share(leftover: i32, total_factor: f64, grow_factor: f32) -> i32 {
    if total_factor <= 0.0 {
        return 0;
    }
    (f64::from(leftover) / total_factor * f64::from(grow_factor)) as i32
}

/// Starting main-axis cursor and cross-axis origin of the content box
fn content_origin(direction: FlexDirection, size: Size, edges: EdgeSizes) -> (i32, i32) {
    match direction {
        FlexDirection::Horizontal => (edges.left, edges.top),
        FlexDirection::HorizontalReversed => (size.width.saturating_sub(edges.right), edges.top),
        FlexDirection::Vertical => (edges.top, edges.left),
        FlexDirection::VerticalReversed => (size.height.saturating_sub(edges.bottom), edges.left),
    }
}

fn point_on(axis: Axis, main: i32, cross: i32) -> Point {
    match axis {
        Axis::Horizontal => Point::new(main, cross),
        Axis::Vertical => Point::new(cross, main),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfy_fits() {
        let mut remaining = 100;
        assert_eq!(satisfy(40, true, &mut remaining), 40);
        assert_eq!(remaining, 60);
    }

    #[test]
    fn test_satisfy_shrinks_to_remainder() {
        let mut remaining = 30;
        assert_eq!(satisfy(40, true, &mut remaining), 30);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_satisfy_overflows_without_shrink() {
        let mut remaining = 30;
        assert_eq!(satisfy(40, false, &mut remaining), 40);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_grow_share_zero_weight() {
        assert_eq!(grow_share(100, 0.0, 0.0), 0);
        assert_eq!(grow_share(100, 4.0, 1.0), 25);
        assert_eq!(grow_share(100, 3.0, 1.0), 33);
    }

    #[test]
    fn test_content_origin_reversed_uses_far_edge() {
        let edges = EdgeSizes::new(1, 2, 3, 4);
        let size = Size::new(100, 50);
        assert_eq!(content_origin(FlexDirection::Horizontal, size, edges), (3, 1));
        assert_eq!(content_origin(FlexDirection::HorizontalReversed, size, edges), (96, 1));
        assert_eq!(content_origin(FlexDirection::Vertical, size, edges), (1, 3));
        assert_eq!(content_origin(FlexDirection::VerticalReversed, size, edges), (48, 3));
    }
}
