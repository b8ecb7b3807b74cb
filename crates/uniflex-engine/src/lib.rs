//! Uniflex Engine
//!
//! Host side of the Uniflex layout engine.
//!
//! - Root sizing from anchored rectangles or any custom source
//! - Layout triggers: start, per-frame controllers, on-demand requests
//! - Presentation of laid-out rects to the host renderer
//!
//! # Example
//! ```rust
//! use uniflex_engine::{Config, Engine, UniformSize};
//! use uniflex_layout::{FlexDirection, LayoutStyle, LayoutTree, Size};
//!
//! let mut tree = LayoutTree::new();
//! let root = tree.create_node(LayoutStyle::root(FlexDirection::Horizontal));
//! let mut engine = Engine::new(Config::default(), tree, UniformSize(Size::new(640, 480)));
//! engine.add_controller(root).unwrap();
//! engine.start();
//! assert_eq!(engine.tree().result(root).unwrap().size, Size::new(640, 480));
//! ```

mod config;
mod engine;
mod presenter;
mod root_size;

pub use config::Config;
pub use engine::{Engine, EngineError};
pub use presenter::{present, Presenter};
pub use root_size::{AnchoredRect, AnchoredRoots, RootSizeSource, UniformSize};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
