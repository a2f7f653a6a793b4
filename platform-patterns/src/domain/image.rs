//! Pattern image references.

use std::fmt;

use reqwest::Url;
use serde::Serialize;

use super::error::ValidationError;

/// Where the pattern image comes from.
///
/// Chosen once per entry; each source has its own follow-up prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    None,
    Url,
    Commons,
    Flickr,
}

impl ImageSource {
    pub const ALL: [ImageSource; 4] = [
        ImageSource::None,
        ImageSource::Url,
        ImageSource::Commons,
        ImageSource::Flickr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ImageSource::None => "none",
            ImageSource::Url => "url",
            ImageSource::Commons => "commons",
            ImageSource::Flickr => "flickr",
        }
    }

    /// Human-readable label for the source picker.
    pub fn label(self) -> &'static str {
        match self {
            ImageSource::None => "no image",
            ImageSource::Url => "image URL",
            ImageSource::Commons => "Wikimedia Commons file",
            ImageSource::Flickr => "Flickr photo",
        }
    }

    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name.trim())
            .ok_or_else(|| ValidationError::UnknownImageSource(name.to_string()))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A reference to the image a pattern was recorded from.
///
/// One constructor per source, so an entry can never carry, say, a Commons
/// filename alongside a Flickr user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ImageRef {
    Url {
        url: String,
    },
    Commons {
        file: String,
    },
    Flickr {
        user: String,
        #[serde(rename = "imageId")]
        image_id: u64,
    },
}

/// Validate an image URL. Empty input means "no image".
///
/// Any well-formed absolute URL with a host is accepted and stored as typed.
pub fn parse_image_url(input: &str) -> Result<Option<ImageRef>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let url = Url::parse(input).map_err(|_| ValidationError::InvalidImageUrl(input.to_string()))?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::InvalidImageUrl(input.to_string()));
    }

    Ok(Some(ImageRef::Url {
        url: input.to_string(),
    }))
}

/// Validate a Wikimedia Commons filename. A `File:` prefix is dropped.
pub fn parse_commons_filename(input: &str) -> Result<ImageRef, ValidationError> {
    let input = input.trim();
    let file = input.strip_prefix("File:").unwrap_or(input).trim();
    if file.is_empty() {
        return Err(ValidationError::InvalidCommonsFilename);
    }
    Ok(ImageRef::Commons {
        file: file.to_string(),
    })
}

/// Validate a Flickr username.
pub fn parse_flickr_user(input: &str) -> Result<String, ValidationError> {
    let user = input.trim();
    if user.is_empty() {
        return Err(ValidationError::InvalidFlickrUser);
    }
    Ok(user.to_string())
}

/// Validate a Flickr image id: a non-negative integer.
pub fn parse_flickr_image_id(input: &str) -> Result<u64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFlickrImageId(input.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidFlickrImageId(input.to_string()))
}
