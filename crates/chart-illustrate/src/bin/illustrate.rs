// File: crates/chart-illustrate/src/bin/illustrate.rs
// Summary: Renders the sampled x² illustration chart to a PNG file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_illustrate::{init, IllustrationConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "illustrate")]
#[command(about = "Sample f(x) = x² and render it as a line chart PNG")]
struct Cli {
    /// Start of the sampled x interval
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    start: f64,

    /// End of the sampled x interval
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    end: f64,

    /// Sampling step (defaults to 1/100 of the interval)
    #[arg(long)]
    step: Option<f64>,

    /// Output PNG path
    #[arg(long, default_value = "target/out/simple_function.png")]
    out: PathBuf,

    #[arg(long, default_value_t = 1024)]
    width: i32,

    #[arg(long, default_value_t = 640)]
    height: i32,

    /// Theme preset: dark, light, high-contrast-dark
    #[arg(long, default_value = "light")]
    theme: String,

    /// Paint the theme background instead of leaving it transparent
    #[arg(long)]
    opaque: bool,

    /// Draw the tooltip for the sample nearest to this x
    #[arg(long, allow_negative_numbers = true)]
    hover_x: Option<f64>,
}

impl Cli {
    fn into_config(self) -> IllustrationConfig {
        IllustrationConfig {
            start: self.start,
            end: self.end,
            step: self.step,
            output: self.out,
            width: self.width,
            height: self.height,
            theme: chart_core::theme::find(&self.theme),
            transparent_background: !self.opaque,
            hover_x: self.hover_x,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chart_illustrate=info,illustrate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Cli::parse().into_config();
    info!(start = config.start, end = config.end, "rendering illustration");

    let path = init(&config).context("failed to render illustration")?;
    println!("Wrote {}", path.display());
    Ok(())
}
