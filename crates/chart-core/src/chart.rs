// File: crates/chart-core/src/chart.rs
// Summary: Line chart struct, tooltip lookup and headless PNG/RGBA rendering using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use chart_sampling::{compute_range, SamplingError};

use crate::axis::Axis;
use crate::grid::{linspace, tick_labels};
use crate::series::Series;
use crate::theme::Theme;
use crate::tooltip::{TooltipFormatter, TooltipPoint};
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};

const GRID_COLUMNS: usize = 10;
const GRID_ROWS: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (titles, ticks, legend, tooltip text) is skipped when false.
    pub draw_labels: bool,
    /// Data-space x of a simulated hover; draws the tooltip for the nearest point.
    pub hover_x: Option<f64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            hover_x: None,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
    pub show_legend: bool,
    tooltip: Option<TooltipFormatter>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
            show_legend: false,
            tooltip: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn with_tooltip<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&TooltipPoint<'_>) -> String + Send + Sync + 'static,
    {
        self.set_tooltip(formatter);
        self
    }

    pub fn set_tooltip<F>(&mut self, formatter: F)
    where
        F: Fn(&TooltipPoint<'_>) -> String + Send + Sync + 'static,
    {
        self.tooltip = Some(Box::new(formatter));
    }

    pub fn has_tooltip(&self) -> bool { self.tooltip.is_some() }

    /// Fit both axes to every series point. The y axis is widened by
    /// `y_margin` (fraction of its span) on each side; a flat dimension is
    /// opened to a unit span.
    pub fn autoscale_axes(&mut self, y_margin: f64) -> Result<(), SamplingError> {
        let coords: Vec<[f64; 2]> = self
            .series
            .iter()
            .flat_map(|s| s.data_xy.iter().map(|&(x, y)| [x, y]))
            .collect();
        let bounds = compute_range(&coords)?;
        let (x, y) = (bounds[0], bounds[1]);

        let x_max = if x.span() < 1e-9 { x.min + 1.0 } else { x.max };
        let y_max = if y.span() < 1e-9 { y.min + 1.0 } else { y.max };
        let m = (y_max - y.min) * y_margin;

        self.x_axis.min = x.min;
        self.x_axis.max = x_max;
        self.y_axis.min = y.min - m;
        self.y_axis.max = y_max + m;
        Ok(())
    }

    /// Sample closest to `x` along the x axis, across all series.
    /// Ties resolve to the earliest series and index.
    pub fn nearest_point(&self, x: f64) -> Option<TooltipPoint<'_>> {
        let mut best: Option<(f64, TooltipPoint<'_>)> = None;
        for s in &self.series {
            for (index, &(px, py)) in s.data_xy.iter().enumerate() {
                let d = (px - x).abs();
                if best.as_ref().map_or(true, |(bd, _)| d < *bd) {
                    best = Some((d, TooltipPoint { series: &s.name, index, x: px, y: py }));
                }
            }
        }
        best.map(|(_, p)| p)
    }

    /// Tooltip text for a hover at data-space `x`.
    pub fn tooltip_at(&self, x: f64) -> Option<String> {
        let formatter = self.tooltip.as_ref()?;
        let point = self.nearest_point(x)?;
        Some(formatter(&point))
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= opts.insets.hsum() as i32 || opts.height <= opts.insets.vsum() as i32 {
            anyhow::bail!(
                "surface {}x{} leaves no plot area inside insets {:?}",
                opts.width,
                opts.height,
                opts.insets
            );
        }
        debug!(width = opts.width, height = opts.height, series = self.series.len(), "rendering chart");

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = PlotRect::from_surface(opts.width, opts.height, &opts.insets);
        let map = Mapper { plot, x: &self.x_axis, y: &self.y_axis };

        draw_grid(canvas, &plot, theme);
        draw_axes(canvas, &plot, theme, &self.x_axis, &self.y_axis, opts.draw_labels);
        if opts.draw_labels {
            if let Some(title) = &self.title {
                draw_title(canvas, &plot, theme, title);
            }
        }

        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom),
            skia::ClipOp::Intersect,
            true,
        );
        for s in &self.series {
            draw_line_series(canvas, &map, theme, s);
        }
        canvas.restore();

        if self.show_legend && opts.draw_labels {
            draw_legend(canvas, &plot, theme, &self.series);
        }

        if let Some(hx) = opts.hover_x {
            if let Some(point) = self.nearest_point(hx) {
                let text = self.tooltip.as_ref().map(|f| f(&point));
                draw_tooltip(canvas, &map, theme, &point, text.as_deref(), opts.draw_labels);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Data-space to pixel mapping for one plot area.
struct Mapper<'a> {
    plot: PlotRect,
    x: &'a Axis,
    y: &'a Axis,
}

impl Mapper<'_> {
    fn px(&self, x: f64) -> f32 {
        self.plot.left + ((x - self.x.min) / self.x.span()) as f32 * self.plot.width()
    }
    fn py(&self, y: f64) -> f32 {
        self.plot.bottom - ((y - self.y.min) / self.y.span()) as f32 * self.plot.height()
    }
}

fn label_font(size: f32) -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(size);
    font
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = fill_paint(color);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);

    // verticals
    for x in linspace(plot.left as f64, plot.right as f64, GRID_COLUMNS) {
        canvas.draw_line((x as f32, plot.top), (x as f32, plot.bottom), &paint);
    }
    // horizontals
    for y in linspace(plot.top as f64, plot.bottom as f64, GRID_ROWS) {
        canvas.draw_line((plot.left, y as f32), (plot.right, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme, x: &Axis, y: &Axis, draw_labels: bool) {
    let axis_paint = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis_paint);

    if !draw_labels {
        return;
    }

    let tick_paint = fill_paint(theme.tick);
    let tick_font = label_font(11.0);
    let xs = linspace(plot.left as f64, plot.right as f64, GRID_COLUMNS);
    for (px, label) in xs.iter().zip(tick_labels(x.min, x.max, GRID_COLUMNS)) {
        let (w, _) = tick_font.measure_str(&label, Some(&tick_paint));
        canvas.draw_str(&label, (*px as f32 - w * 0.5, plot.bottom + 16.0), &tick_font, &tick_paint);
    }
    // y ticks run bottom-up
    let ys = linspace(plot.bottom as f64, plot.top as f64, GRID_ROWS);
    for (py, label) in ys.iter().zip(tick_labels(y.min, y.max, GRID_ROWS)) {
        let (w, _) = tick_font.measure_str(&label, Some(&tick_paint));
        canvas.draw_str(&label, (plot.left - 6.0 - w, *py as f32 + 4.0), &tick_font, &tick_paint);
    }

    let text_paint = fill_paint(theme.axis_label);
    let font = label_font(14.0);
    canvas.draw_str(&x.label, (plot.right - 80.0, plot.bottom + 40.0), &font, &text_paint);
    canvas.draw_str(&y.label, (plot.left - 56.0, plot.top + 14.0), &font, &text_paint);
}

fn draw_title(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme, title: &str) {
    let paint = fill_paint(theme.axis_label);
    let font = label_font(16.0);
    let (w, _) = font.measure_str(title, Some(&paint));
    canvas.draw_str(title, (plot.left + (plot.width() - w) * 0.5, plot.top - 6.0), &font, &paint);
}

fn draw_line_series(canvas: &skia::Canvas, map: &Mapper<'_>, theme: &Theme, series: &Series) {
    let data = &series.data_xy;
    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((map.px(x0), map.py(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((map.px(x), map.py(y)));
        }
        canvas.draw_path(&path, &stroke_paint(theme.line_stroke, 2.0));
    }

    if series.show_markers || data.len() == 1 {
        let marker = fill_paint(theme.line_stroke);
        for &(x, y) in data {
            canvas.draw_circle((map.px(x), map.py(y)), 3.0, &marker);
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme, series: &[Series]) {
    let font = label_font(12.0);
    let text_paint = fill_paint(theme.axis_label);
    let swatch = stroke_paint(theme.line_stroke, 2.0);
    for (i, s) in series.iter().enumerate() {
        let (w, _) = font.measure_str(&s.name, Some(&text_paint));
        let y = plot.top + 16.0 + i as f32 * 18.0;
        let x = plot.right - w - 12.0;
        canvas.draw_line((x - 26.0, y - 4.0), (x - 6.0, y - 4.0), &swatch);
        canvas.draw_str(&s.name, (x, y), &font, &text_paint);
    }
}

fn draw_tooltip(
    canvas: &skia::Canvas,
    map: &Mapper<'_>,
    theme: &Theme,
    point: &TooltipPoint<'_>,
    text: Option<&str>,
    draw_labels: bool,
) {
    let (cx, cy) = (map.px(point.x), map.py(point.y));
    canvas.draw_circle((cx, cy), 4.0, &fill_paint(theme.highlight));

    let Some(text) = text else { return };
    let plot = &map.plot;
    let size = 13.0;
    let pad = 6.0;
    let font = label_font(size);
    let text_paint = fill_paint(theme.tooltip_text);
    // fixed advance keeps the box size independent of installed fonts
    let text_w = if draw_labels {
        font.measure_str(text, Some(&text_paint)).0
    } else {
        text.chars().count() as f32 * size * 0.55
    };

    let box_w = text_w + pad * 2.0;
    let box_h = size + pad * 2.0;
    let mut bx = cx + 10.0;
    if bx + box_w > plot.right {
        bx = cx - 10.0 - box_w;
    }
    let mut by = cy - 10.0 - box_h;
    if by < plot.top {
        by = cy + 10.0;
    }

    let rect = skia::Rect::from_xywh(bx, by, box_w, box_h);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(theme.tooltip_fill));
    canvas.draw_round_rect(rect, 4.0, 4.0, &stroke_paint(theme.tooltip_border, 1.0));
    if draw_labels {
        canvas.draw_str(text, (bx + pad, by + pad + size * 0.8), &font, &text_paint);
    }
}
