use std::borrow::Cow;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An embeddable image resource.
///
/// Created once through [`Workbook::create_image`](super::Workbook::create_image)
/// and placed any number of times with
/// [`Sheet::add_image`](super::Sheet::add_image); encoders deduplicate the
/// payload by id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Workbook-unique id, assigned at creation and never reused.
    pub id: u32,
    pub data: ImageData,
    pub format: ImageFormat,
}

impl Image {
    /// Raw image bytes, decoding a base64 payload if needed.
    ///
    /// # Errors
    /// Returns [`XlbookError::ImageData`](crate::XlbookError::ImageData) when
    /// a base64 payload is malformed.
    pub fn bytes(&self) -> Result<Cow<'_, [u8]>> {
        match &self.data {
            ImageData::Buffer(bytes) => Ok(Cow::Borrowed(bytes)),
            ImageData::Base64(text) => Ok(Cow::Owned(STANDARD.decode(text)?)),
        }
    }
}

/// Image payload as supplied by the caller: raw bytes or a base64 string.
/// Stored as given; decoding happens on demand via [`Image::bytes`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ImageData {
    Buffer(Vec<u8>),
    Base64(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// An image anchored to a sheet coordinate.
///
/// Placements never touch the cell grid; several may share one anchor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImagePlacement {
    pub image: Image,
    /// Anchor row (0-based).
    pub row: u32,
    /// Anchor column (0-based).
    pub col: u32,
    /// Rendered width in pixels.
    pub width: u32,
    /// Rendered height in pixels.
    pub height: u32,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn buffer_bytes_are_borrowed() {
        let image = Image {
            id: 1,
            data: ImageData::Buffer(vec![0x89, 0x50, 0x4e, 0x47]),
            format: ImageFormat::Png,
        };
        assert_eq!(image.bytes().unwrap().as_ref(), &[0x89, 0x50, 0x4e, 0x47]);
    }

    #[test]
    fn base64_bytes_decode() {
        let image = Image {
            id: 2,
            data: ImageData::Base64("iVBORw==".to_string()),
            format: ImageFormat::Png,
        };
        assert_eq!(image.bytes().unwrap().as_ref(), &[0x89, 0x50, 0x4e, 0x47]);
    }

    #[test]
    fn malformed_base64_is_an_error() {
        let image = Image {
            id: 3,
            data: ImageData::Base64("not base64!".to_string()),
            format: ImageFormat::Jpeg,
        };
        assert!(image.bytes().is_err());
    }
}
