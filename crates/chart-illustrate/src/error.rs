// File: crates/chart-illustrate/src/error.rs
// Summary: Errors surfaced by the illustration pipeline.

use chart_sampling::SamplingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IllustrationError {
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    /// The sampled function failed; the original error is the `source`.
    #[error("function evaluation failed: {0}")]
    Evaluation(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error(transparent)]
    Render(#[from] anyhow::Error),
}
