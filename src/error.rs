use thiserror::Error;

/// Errors raised by canvas and image operations
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Image size {width}x{height} is outside the supported range")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No image is open")]
    NoImage,

    #[error("Failed to allocate a {width}x{height} bitmap")]
    Allocation { width: u32, height: u32 },

    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for canvas and image operations
pub type PaintResult<T> = Result<T, PaintError>;
