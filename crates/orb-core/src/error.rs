use thiserror::Error;

/// Precondition failures. All of them are fatal for a session and are
/// reported before the frame loop starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrbError {
    #[error("render target not found: {0}")]
    MissingRenderTarget(String),
    #[error("render target has zero size ({width}x{height})")]
    ZeroSizedTarget { width: f32, height: f32 },
    #[error("degenerate {0} vector")]
    DegenerateVector(&'static str),
}
