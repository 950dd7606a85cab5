// File: crates/chart-illustrate/src/lib.rs
// Summary: Illustration entry point; sampling-to-chart pipeline, renderer adapters and config.

pub mod error;
pub mod spec;
pub mod renderer;
pub mod illustrate;
pub mod config;

pub use error::IllustrationError;
pub use spec::{format_tooltip, LineChartSpec};
pub use renderer::{to_chart, ChartRenderer, PngFileRenderer, SkiaChartRenderer, Y_AXIS_PADDING};
pub use illustrate::{build_spec, make_chart, try_build_spec, try_make_chart};
pub use config::{init, simple_function, IllustrationConfig};
