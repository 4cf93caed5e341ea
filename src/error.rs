//! Error types for the img2palette library

use thiserror::Error;

/// Result type alias for img2palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

#[derive(Error, Debug)]
pub enum PaletteError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// Decoded image has no pixels to sample
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
