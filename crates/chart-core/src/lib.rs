// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for line chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod theme;
pub mod tooltip;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::Axis;
pub use theme::Theme;
pub use tooltip::{TooltipFormatter, TooltipPoint};
