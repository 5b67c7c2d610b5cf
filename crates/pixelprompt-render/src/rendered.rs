use core::fmt;
use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbImage};
use pixelprompt::estimate_image_tokens;
use serde::{Deserialize, Serialize};

/// One rendered page and its token cost.
#[derive(Clone, Debug)]
pub struct RenderedImage {
    image: RgbImage,
    tokens: u64,
}

impl RenderedImage {
    /// Wrap `image`, costing it from its own dimensions.
    pub fn new(image: RgbImage) -> Self {
        let tokens = estimate_image_tokens(image.width(), image.height());
        Self { image, tokens }
    }

    /// Wrap `image` with a caller-computed token cost.
    pub fn with_tokens(image: RgbImage, tokens: u64) -> Self {
        Self { image, tokens }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Estimated vision tokens for this image.
    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    /// PNG-encoded bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>, ExportError> {
        let mut buf = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }

    /// Size of the PNG encoding in bytes.
    pub fn size_bytes(&self) -> Result<usize, ExportError> {
        Ok(self.png_bytes()?.len())
    }

    /// Standard base64 of the PNG encoding.
    pub fn base64(&self) -> Result<String, ExportError> {
        Ok(STANDARD.encode(self.png_bytes()?))
    }

    /// Image block in the shape the Messages API expects.
    pub fn to_content_block(&self) -> Result<ContentBlock, ExportError> {
        Ok(ContentBlock::Image {
            source: ImageSource::Base64 {
                media_type: "image/png".to_string(),
                data: self.base64()?,
            },
        })
    }

    /// [`to_content_block`](Self::to_content_block) as a JSON value.
    pub fn to_content_block_json(&self) -> Result<serde_json::Value, ExportError> {
        Ok(serde_json::to_value(self.to_content_block()?)?)
    }

    /// Write the PNG encoding to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let bytes = self.png_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// API content block.
///
/// Serializes as
/// `{"type": "image", "source": {"type": "base64", "media_type": "image/png", "data": "..."}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Image { source: ImageSource },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImageSource {
    Base64 { media_type: String, data: String },
}

/// Failure to encode or write a rendered image.
#[derive(Debug)]
pub enum ExportError {
    Encode(image::ImageError),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "png encoding failed: {}", err),
            Self::Json(err) => write!(f, "content block serialization failed: {}", err),
            Self::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<image::ImageError> for ExportError {
    fn from(value: image::ImageError) -> Self {
        Self::Encode(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample() -> RenderedImage {
        RenderedImage::new(RgbImage::from_pixel(100, 100, image::Rgb([255, 255, 255])))
    }

    #[test]
    fn tokens_default_to_dimension_estimate() {
        assert_eq!(sample().tokens(), 13);
        let tagged = RenderedImage::with_tokens(RgbImage::new(10, 10), 42);
        assert_eq!(tagged.tokens(), 42);
    }

    #[test]
    fn png_bytes_start_with_signature() {
        let bytes = sample().png_bytes().expect("encode");
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
        assert_eq!(sample().size_bytes().expect("size"), bytes.len());
    }

    #[test]
    fn content_block_has_api_shape() {
        let value = sample().to_content_block_json().expect("block");
        assert_eq!(value["type"], "image");
        assert_eq!(value["source"]["type"], "base64");
        assert_eq!(value["source"]["media_type"], "image/png");
        let data = value["source"]["data"].as_str().expect("data");
        let decoded = STANDARD.decode(data).expect("base64");
        assert_eq!(&decoded[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn save_to_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = sample()
            .save(dir.path().join("missing").join("page.png"))
            .unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
