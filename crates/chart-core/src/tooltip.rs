// File: crates/chart-core/src/tooltip.rs
// Summary: Tooltip data point and formatter callback type.

/// Data point under the cursor, handed to the tooltip formatter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPoint<'a> {
    pub series: &'a str,
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Turns the hovered point into the tooltip text.
pub type TooltipFormatter = Box<dyn Fn(&TooltipPoint<'_>) -> String + Send + Sync>;
