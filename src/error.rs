//! Configuration errors raised when a [`RenderConfig`](crate::RenderConfig) is
//! bound to an engine.

use core::fmt;

/// Invalid configuration value.
///
/// Raised once at engine construction; never retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `font_size` outside `6..=20`.
    FontSizeOutOfRange { value: u32, min: u32, max: u32 },
    /// `font_family` is not one of the supported generic families.
    UnknownFontFamily(String),
    /// `max_width` below the minimum image width.
    WidthTooSmall { value: u32, min: u32 },
    /// `max_height` below the minimum image height.
    HeightTooSmall { value: u32, min: u32 },
    /// `padding` is negative.
    NegativePadding(i32),
    /// `line_spacing` is negative.
    NegativeLineSpacing(i32),
    /// `content_type` does not name a preset.
    UnknownContentType(String),
    /// Prompt style name is not recognized.
    UnknownPromptStyle(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontSizeOutOfRange { value, min, max } => write!(
                f,
                "font_size must be between {} and {} (got {})",
                min, max, value
            ),
            Self::UnknownFontFamily(name) => write!(
                f,
                "font_family must be 'monospace', 'serif', or 'sans-serif' (got '{}')",
                name
            ),
            Self::WidthTooSmall { value, min } => {
                write!(f, "max_width must be >= {} (got {})", min, value)
            }
            Self::HeightTooSmall { value, min } => {
                write!(f, "max_height must be >= {} (got {})", min, value)
            }
            Self::NegativePadding(value) => {
                write!(f, "padding must be non-negative (got {})", value)
            }
            Self::NegativeLineSpacing(value) => {
                write!(f, "line_spacing must be non-negative (got {})", value)
            }
            Self::UnknownContentType(name) => write!(
                f,
                "unknown content type '{}'. Valid types: code, config, json, prose",
                name
            ),
            Self::UnknownPromptStyle(name) => write!(
                f,
                "unknown prompt style '{}'. Valid styles: concise, extract, none, structured",
                name
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
