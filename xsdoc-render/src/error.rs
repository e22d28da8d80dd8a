//! Error types for documentation rendering.

use thiserror::Error;

/// Error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] xsdoc_schema::ParseError),

    /// Layout construction error.
    #[error("layout error: {0}")]
    Model(#[from] xsdoc_model::ModelError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;
