use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the digit-art pipeline.
#[derive(Error, Debug)]
pub enum PisciiError {
    /// The digit stream cannot cover every cell of the grid.
    #[error("need {required} digits for the output grid but only {actual} are available")]
    InsufficientDigits { required: usize, actual: usize },

    /// Requested grid cannot be addressed (cell count or a side exceeds u32).
    #[error("output size {width}x{height} is too large")]
    GridTooLarge { width: usize, height: usize },

    /// A character other than a decimal digit survived whitespace/'.' stripping.
    #[error("unexpected character {found:?} at position {position} of the digit stream")]
    MalformedDigitStream { position: usize, found: char },

    #[error("unknown color name '{0}' (expected one of BLACK, WHITE, BLUE, CYAN, GREEN, MAGENTA, RED, YELLOW)")]
    UnknownColorName(String),

    #[error("failed to decode image {path:?}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read digit file {path:?}: {source}")]
    DigitFileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),
}

pub type Result<T> = std::result::Result<T, PisciiError>;
