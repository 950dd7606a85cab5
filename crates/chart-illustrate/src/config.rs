// File: crates/chart-illustrate/src/config.rs
// Summary: Illustration settings and the initialization entry point that renders the demo chart.

use std::path::PathBuf;

use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{RenderOptions, Theme};

use crate::error::IllustrationError;
use crate::illustrate::make_chart;
use crate::renderer::PngFileRenderer;

/// The function shown by the illustration.
pub fn simple_function(x: f64) -> f64 {
    x * x
}

#[derive(Clone, Debug)]
pub struct IllustrationConfig {
    pub start: f64,
    pub end: f64,
    pub step: Option<f64>,
    pub output: PathBuf,
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub transparent_background: bool,
    pub hover_x: Option<f64>,
}

impl Default for IllustrationConfig {
    fn default() -> Self {
        Self {
            start: -2.0,
            end: 2.0,
            step: None,
            output: PathBuf::from("target/out/simple_function.png"),
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::light(),
            transparent_background: true,
            hover_x: None,
        }
    }
}

impl IllustrationConfig {
    pub fn render_options(&self) -> RenderOptions {
        let theme = if self.transparent_background {
            self.theme.with_transparent_background()
        } else {
            self.theme
        };
        RenderOptions {
            width: self.width,
            height: self.height,
            theme,
            hover_x: self.hover_x,
            ..RenderOptions::default()
        }
    }
}

/// Render `simple_function` as configured and return the written PNG path.
/// Called once by the host after its own startup.
pub fn init(config: &IllustrationConfig) -> Result<PathBuf, IllustrationError> {
    let mut renderer = PngFileRenderer::new(config.render_options(), &config.output);
    make_chart(&mut renderer, simple_function, config.start, config.end, config.step)
}
