//! Measure Pass
//!
//! Bottom-up expected sizes. Percent lengths are left at zero here and
//! resolved during distribution, once the parent's content length is known.

use crate::box_model::{Axis, Size};
use crate::result::LayoutResults;
use crate::style::{LayoutStyle, SizeMode};
use crate::{LayoutTree, NodeId};

/// Measure `id` and its layout subtree against the parent's main axis.
///
/// Returns the node's expected size, own margins included, and records it
/// in `results`.
pub(crate) fn measure(
    tree: &LayoutTree,
    id: NodeId,
    parent_axis: Axis,
    results: &mut LayoutResults,
) -> Size {
    let Some(style) = tree.style(id).map(LayoutStyle::sanitized) else {
        return Size::ZERO;
    };

    // Children are always re-queried from the live tree.
    let own_axis = style.direction.axis();
    let mut content = Size::ZERO;
    for child in tree.layout_children(id) {
        let child_size = measure(tree, child, own_axis, results);
        content.width = content.width.saturating_add(child_size.width);
        content.height = content.height.saturating_add(child_size.height);
    }

    let main = if style.grow {
        content.main(parent_axis)
    } else {
        base_length(&style, parent_axis, Some(content.main(parent_axis)))
    };
    let cross = base_length(&style, parent_axis.flip(), None);

    let bare = Size::from_axes(parent_axis, main, cross);
    // Reserve only margin the distribute pass will keep once this node
    // receives its expected size.
    let margin = style.margin.fit_around(bare);
    let expected = margin.grow(bare);

    tracing::trace!(?id, ?expected, "measured");
    results.entry(id).expected = expected;
    expected
}

/// Length from the node's own sizing mode. `content` is the auto length, if
/// the axis aggregates children at all.
fn base_length(style: &LayoutStyle, axis: Axis, content: Option<i32>) -> i32 {
    match style.mode(axis) {
        SizeMode::Fixed => style.fixed(axis),
        SizeMode::Percent => 0,
        SizeMode::Auto => content.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_model::EdgeSizes;
    use crate::style::FlexDirection;

    fn tree_with_root() -> (LayoutTree, NodeId) {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(LayoutStyle::root(FlexDirection::Horizontal));
        (tree, root)
    }

    #[test]
    fn test_fixed_leaf_expected() {
        let (mut tree, root) = tree_with_root();
        let leaf = tree.create_node(LayoutStyle {
            height_mode: SizeMode::Fixed,
            height: 30,
            ..LayoutStyle::fixed_width(80)
        });
        tree.append_child(root, leaf).unwrap();

        let mut results = LayoutResults::new();
        measure(&tree, root, Axis::Horizontal, &mut results);
        assert_eq!(results.get(leaf).unwrap().expected, Size::new(80, 30));
    }

    #[test]
    fn test_growing_node_sums_children() {
        let (mut tree, root) = tree_with_root();
        let row = tree.create_node(LayoutStyle::growing(1.0));
        let a = tree.create_node(LayoutStyle::fixed_width(40));
        let b = tree.create_node(LayoutStyle::fixed_width(60));
        tree.append_child(root, row).unwrap();
        tree.append_child(row, a).unwrap();
        tree.append_child(row, b).unwrap();

        let mut results = LayoutResults::new();
        measure(&tree, root, Axis::Horizontal, &mut results);
        assert_eq!(results.get(row).unwrap().expected.width, 100);
    }

    #[test]
    fn test_fixed_leaf_adds_margin() {
        let (mut tree, root) = tree_with_root();
        let leaf = tree.create_node(LayoutStyle {
            width_mode: SizeMode::Fixed,
            width: 20,
            grow: false,
            margin: EdgeSizes::new(0, 0, 4, 6),
            ..LayoutStyle::default()
        });
        tree.append_child(root, leaf).unwrap();

        let mut results = LayoutResults::new();
        measure(&tree, root, Axis::Horizontal, &mut results);
        assert_eq!(results.get(leaf).unwrap().expected.width, 30);
    }

    #[test]
    fn test_auto_leaf_is_zero_plus_margin() {
        let (mut tree, root) = tree_with_root();
        let empty = tree.create_node(LayoutStyle::default());
        let padded = tree.create_node(LayoutStyle::default().with_margin(EdgeSizes::new(0, 0, 5, 5)));
        let one_sided = tree.create_node(LayoutStyle::default().with_margin(EdgeSizes::new(0, 0, 8, 0)));
        for child in [empty, padded, one_sided] {
            tree.append_child(root, child).unwrap();
        }

        let mut results = LayoutResults::new();
        measure(&tree, root, Axis::Horizontal, &mut results);
        assert_eq!(results.get(empty).unwrap().expected, Size::ZERO);
        assert_eq!(results.get(padded).unwrap().expected, Size::new(10, 0));
        // A lone edge can never exceed half of a box it alone makes up.
        assert_eq!(results.get(one_sided).unwrap().expected, Size::ZERO);
    }

    #[test]
    fn test_huge_sizes_saturate() {
        let (mut tree, root) = tree_with_root();
        let row = tree.create_node(LayoutStyle::growing(1.0));
        for _ in 0..2 {
            let wide = tree.create_node(LayoutStyle::fixed_width(1_500_000_000));
            tree.append_child(row, wide).unwrap();
        }
        let widest = tree.create_node(
            LayoutStyle::fixed_width(i32::MAX).with_margin(EdgeSizes::new(0, 0, 10, 0)),
        );
        tree.append_child(root, row).unwrap();
        tree.append_child(root, widest).unwrap();

        let mut results = LayoutResults::new();
        measure(&tree, root, Axis::Horizontal, &mut results);
        assert_eq!(results.get(row).unwrap().expected.width, i32::MAX);
        assert_eq!(results.get(widest).unwrap().expected.width, i32::MAX);
        assert_eq!(results.get(root).unwrap().expected.width, i32::MAX);
    }

    #[test]
    fn test_percent_deferred() {
        let (mut tree, root) = tree_with_root();
        let leaf = tree.create_node(LayoutStyle {
            width_mode: SizeMode::Percent,
            width_percent: 0.5,
            grow: false,
            ..LayoutStyle::default()
        });
        tree.append_child(root, leaf).unwrap();

        let mut results = LayoutResults::new();
        measure(&tree, root, Axis::Horizontal, &mut results);
        assert_eq!(results.get(leaf).unwrap().expected.width, 0);
    }

    #[test]
    fn test_nested_root_not_measured() {
        let (mut tree, root) = tree_with_root();
        let nested = tree.create_node(LayoutStyle::root(FlexDirection::Vertical));
        tree.append_child(root, nested).unwrap();

        let mut results = LayoutResults::new();
        measure(&tree, root, Axis::Horizontal, &mut results);
        assert!(results.get(nested).is_none());
    }
}
