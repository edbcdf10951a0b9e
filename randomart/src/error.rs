use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtError {
    #[error("grid dimensions {width}x{height} must both be odd and at least 3")]
    InvalidDims { width: usize, height: usize },

    #[error("unknown caption position '{0}' (expected 'header' or 'footer')")]
    UnknownCaptionPosition(String),

    #[error("invalid charset: {0}")]
    InvalidCharset(String),
}
