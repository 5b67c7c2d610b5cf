//! Render configuration and content-type presets.
//!
//! A [`RenderConfig`] is plain data: any combination of values can be built,
//! serialized, and passed around. Range checks run only when the config is
//! bound to an engine through [`RenderConfig::resolved`].

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cost::MAX_VISION_DIMENSION;
use crate::error::ConfigError;

/// Smallest accepted font size in pixels.
pub const MIN_FONT_SIZE: u32 = 6;
/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: u32 = 20;
/// Smallest accepted `max_width`, and the floor for dynamically sized images.
pub const MIN_IMAGE_WIDTH: u32 = 50;
/// Smallest accepted `max_height`, and the floor for dynamically sized images.
pub const MIN_IMAGE_HEIGHT: u32 = 20;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Components as an array, red first.
    pub fn channels(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self(r, g, b)
    }
}

/// Generic font family used to pick a concrete font file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Monospace,
    Serif,
    SansSerif,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [Self::Monospace, Self::Serif, Self::SansSerif];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monospace => "monospace",
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monospace" => Ok(Self::Monospace),
            "serif" => Ok(Self::Serif),
            "sans-serif" => Ok(Self::SansSerif),
            other => Err(ConfigError::UnknownFontFamily(other.to_string())),
        }
    }
}

/// Content category with tuned rendering defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Long-form text, articles, documentation.
    Prose,
    /// JSON data and API responses; compacted before rendering.
    Json,
    /// Source code; never minified.
    Code,
    /// INI, TOML, YAML, env files; structure preserved.
    Config,
}

/// Rendering defaults attached to a [`ContentType`].
///
/// `font_size` and `minify` are applied by [`RenderConfig::resolved`]. The
/// savings figures are benchmark results kept for documentation and are not
/// enforced anywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentPreset {
    pub font_size: u32,
    pub minify: bool,
    pub description: &'static str,
    pub expected_input_savings: f32,
    pub expected_net_savings: f32,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [Self::Prose, Self::Json, Self::Code, Self::Config];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prose => "prose",
            Self::Json => "json",
            Self::Code => "code",
            Self::Config => "config",
        }
    }

    pub fn preset(self) -> ContentPreset {
        match self {
            Self::Prose => ContentPreset {
                font_size: 9,
                minify: true,
                description: "Long-form text, articles, documentation",
                expected_input_savings: 0.71,
                expected_net_savings: 0.69,
            },
            Self::Json => ContentPreset {
                font_size: 9,
                minify: true,
                description: "JSON data, API responses, structured data",
                expected_input_savings: 0.83,
                expected_net_savings: 0.80,
            },
            Self::Code => ContentPreset {
                font_size: 7,
                minify: false,
                description: "Source code, scripts, functions",
                expected_input_savings: 0.61,
                expected_net_savings: 0.59,
            },
            Self::Config => ContentPreset {
                font_size: 8,
                minify: false,
                description: "INI, TOML, YAML, env files",
                expected_input_savings: 0.41,
                expected_net_savings: 0.39,
            },
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownContentType(s.to_string()))
    }
}

/// Text-to-image rendering options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Font size in pixels (6-20).
    pub font_size: u32,
    /// `monospace`, `serif`, or `sans-serif`.
    pub font_family: String,
    /// Upper bound on image width in pixels.
    pub max_width: u32,
    /// Upper bound on image height in pixels.
    pub max_height: u32,
    /// Fit width to the longest line instead of always using `max_width`.
    pub dynamic_width: bool,
    /// Fit height to the line count instead of always using `max_height`.
    pub dynamic_height: bool,
    pub background_color: Rgb,
    pub text_color: Rgb,
    /// Pixels between the image edge and the text block.
    pub padding: i32,
    /// Extra pixels between consecutive lines.
    pub line_spacing: i32,
    /// Strip visual-only formatting before layout.
    ///
    /// Removes blank lines, markdown heading markers, `**`/`__` emphasis, and
    /// repeated spaces, and joins prose lines so word wrap decides the breaks.
    /// Disable for text whose exact layout matters (code, config files).
    pub minify: bool,
    /// Optional preset name: `prose`, `json`, `code`, `config`, or `none`.
    ///
    /// When set, the preset's `font_size` and `minify` replace the manual
    /// values at engine binding.
    pub content_type: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_size: 9,
            font_family: FontFamily::Monospace.as_str().to_string(),
            max_width: MAX_VISION_DIMENSION,
            max_height: MAX_VISION_DIMENSION,
            dynamic_width: true,
            dynamic_height: true,
            background_color: Rgb::WHITE,
            text_color: Rgb::BLACK,
            padding: 5,
            line_spacing: 1,
            minify: true,
            content_type: None,
        }
    }
}

impl RenderConfig {
    /// Default config tuned for a content type.
    pub fn for_content(content_type: &str) -> Result<Self, ConfigError> {
        let kind: ContentType = content_type.parse()?;
        let preset = kind.preset();
        Ok(Self {
            font_size: preset.font_size,
            minify: preset.minify,
            content_type: Some(kind.as_str().to_string()),
            ..Self::default()
        })
    }

    /// Alias for `max_width`.
    pub fn width(&self) -> u32 {
        self.max_width
    }

    /// Alias for `max_height`.
    pub fn height(&self) -> u32 {
        self.max_height
    }

    /// Parsed font family.
    pub fn font_family(&self) -> Result<FontFamily, ConfigError> {
        self.font_family.parse()
    }

    /// Parsed content type; `None` and `"none"` both mean no preset.
    pub fn content_type(&self) -> Result<Option<ContentType>, ConfigError> {
        match self.content_type.as_deref() {
            None | Some("none") => Ok(None),
            Some(name) => name.parse().map(Some),
        }
    }

    /// Check every numeric and enumerated field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(ConfigError::FontSizeOutOfRange {
                value: self.font_size,
                min: MIN_FONT_SIZE,
                max: MAX_FONT_SIZE,
            });
        }
        self.font_family()?;
        if self.max_width < MIN_IMAGE_WIDTH {
            return Err(ConfigError::WidthTooSmall {
                value: self.max_width,
                min: MIN_IMAGE_WIDTH,
            });
        }
        if self.max_height < MIN_IMAGE_HEIGHT {
            return Err(ConfigError::HeightTooSmall {
                value: self.max_height,
                min: MIN_IMAGE_HEIGHT,
            });
        }
        if self.padding < 0 {
            return Err(ConfigError::NegativePadding(self.padding));
        }
        if self.line_spacing < 0 {
            return Err(ConfigError::NegativeLineSpacing(self.line_spacing));
        }
        self.content_type()?;
        Ok(())
    }

    /// Validated copy with the content preset applied.
    ///
    /// The preset is applied before validation, so a preset can repair an
    /// out-of-range manual `font_size`.
    pub fn resolved(&self) -> Result<Self, ConfigError> {
        let mut out = self.clone();
        if let Some(kind) = self.content_type()? {
            let preset = kind.preset();
            out.font_size = preset.font_size;
            out.minify = preset.minify;
        }
        out.validate()?;
        Ok(out)
    }
}
