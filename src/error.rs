use thiserror::Error;

/// Errors that can occur while preparing or tracing a stroke.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StrokeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
