//! Example: lay out a small panel and print its rectangles

use tracing_subscriber::EnvFilter;
use uniflex_engine::{AnchoredRect, Config, Engine, Presenter};
use uniflex_layout::{EdgeSizes, FlexDirection, LayoutStyle, LayoutTree, NodeId, Rect, SizeMode};

struct PrintPresenter;

impl Presenter for PrintPresenter {
    fn draw_rect(&mut self, node: NodeId, rect: Rect, depth: usize) {
        println!(
            "{:indent$}{:?}: {}x{} at ({}, {})",
            "",
            node,
            rect.width,
            rect.height,
            rect.x,
            rect.y,
            indent = depth * 2
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = LayoutTree::new();
    let root = tree.create_node(
        LayoutStyle::root(FlexDirection::Vertical).with_padding(EdgeSizes::all(8)),
    );
    let toolbar = tree.create_node(LayoutStyle::fixed_height(40));
    let body = tree.create_node(LayoutStyle::growing(1.0).with_direction(FlexDirection::Horizontal));
    let sidebar = tree.create_node(LayoutStyle {
        width_mode: SizeMode::Percent,
        width_percent: 0.25,
        grow: false,
        ..LayoutStyle::default()
    });
    let main_view = tree.create_node(LayoutStyle::growing(1.0).with_margin(EdgeSizes::all(4)));
    tree.append_child(root, toolbar)?;
    tree.append_child(root, body)?;
    tree.append_child(body, sidebar)?;
    tree.append_child(body, main_view)?;

    let config = Config::default();
    let mut engine = Engine::anchored(config, tree);
    engine.sizes_mut().insert(root, AnchoredRect::fixed(800.0, 600.0));
    engine.add_controller(root)?;
    engine.start();

    println!("Uniflex Engine v{}", uniflex_engine::VERSION);
    engine.present(root, &mut PrintPresenter);

    engine.sizes_mut().insert(root, AnchoredRect::stretch());
    engine.tick();
    println!("After stretching to the container:");
    engine.present(root, &mut PrintPresenter);

    Ok(())
}
