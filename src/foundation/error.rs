/// Result alias used throughout the crate.
pub type RepixResult<T> = Result<T, RepixError>;

/// Why an input document was rejected.
///
/// Every variant is detected before rasterization starts; a [`PixelMap`](crate::PixelMap) that
/// exists has already passed all of them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The bytes are not UTF-8 JSON.
    #[error("invalid JSON: {0}")]
    MalformedInput(String),

    /// Valid JSON, but not an object with a `pixels` object inside.
    #[error("JSON must contain a 'pixels' object")]
    MalformedStructure,

    /// `pixels` is present and empty.
    #[error("no pixel data found")]
    EmptyPixelData,

    /// The color for this coordinate key is not a 3-element array.
    #[error("invalid color format for coordinate {0}")]
    InvalidColorShape(String),

    /// A channel of the color for this coordinate key is not an integer in `[0, 255]`.
    #[error("color values must be integers between 0 and 255 for coordinate {0}")]
    InvalidColorRange(String),

    /// The key is not of the form `"<x>,<y>"` with non-negative base-10 integers.
    #[error("invalid coordinate key '{0}', expected \"<x>,<y>\" with non-negative integers")]
    InvalidCoordinate(String),

    /// Two keys name the same logical pixel (for example `"1,2"` and `"01,2"`).
    #[error("coordinate {0} is specified more than once")]
    DuplicateCoordinate(String),

    /// The logical canvas is too large to give every pixel at least one output pixel.
    #[error(
        "canvas of {width}x{height} logical pixels exceeds the {max}-pixel limit (scale factor would be 0)"
    )]
    DegenerateScale {
        /// Logical width (`max x + 1`).
        width: u64,
        /// Logical height (`max y + 1`).
        height: u64,
        /// Output cap the canvas was checked against.
        max: u32,
    },
}

/// Crate-level error.
#[derive(thiserror::Error, Debug)]
pub enum RepixError {
    /// The input document was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// PNG encoding or decoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),

    /// Any other failure, with context attached by `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepixError {
    /// Build a [`RepixError::Encode`] from a message.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`RepixError::Io`] from a message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// The validation failure behind this error, if that is what it is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
