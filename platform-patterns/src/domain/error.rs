//! Validation error types.
//!
//! These errors are produced when a raw prompt answer fails a domain
//! constraint. They are distinct from lookup and I/O errors.

/// Validation failures for user-supplied entry data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The required station was left empty
    #[error("no station given")]
    NoStation,

    /// Line selection contains no selected line
    #[error("no lines selected")]
    NoLinesSelected,

    /// Palette selection is empty
    #[error("no colors selected")]
    NoColorsSelected,

    /// A colour is missing, malformed, or not in the palette
    #[error("invalid color {input:?}: {reason}")]
    InvalidColor { input: String, reason: &'static str },

    /// Image URL is not a well-formed absolute URL
    #[error("invalid image url {0:?}")]
    InvalidImageUrl(String),

    /// Wikimedia Commons filename is empty
    #[error("invalid commons filename")]
    InvalidCommonsFilename,

    /// Flickr username is empty
    #[error("invalid flickr user")]
    InvalidFlickrUser,

    /// Flickr image id is not a non-negative integer
    #[error("invalid flickr image id {0:?}")]
    InvalidFlickrImageId(String),

    /// Image source is not one of the known variants
    #[error("unknown image source {0:?}")]
    UnknownImageSource(String),
}

impl ValidationError {
    pub(crate) fn invalid_color(input: &str, reason: &'static str) -> Self {
        ValidationError::InvalidColor {
            input: input.to_string(),
            reason,
        }
    }
}
