//! Engine Configuration

use uniflex_layout::Size;

/// Engine configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// Lay out every controlled root once when the engine starts
    pub layout_on_start: bool,

    /// Re-lay-out controlled roots on every frame tick
    pub relayout_every_frame: bool,

    /// Container size anchored roots stretch against
    pub container_size: Size,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout_on_start: true,
            relayout_every_frame: true,
            container_size: Size::new(1920, 1080),
        }
    }
}

impl Config {
    /// Layout only happens on explicit request
    pub fn manual() -> Self {
        Self {
            relayout_every_frame: false,
            ..Self::default()
        }
    }
}
