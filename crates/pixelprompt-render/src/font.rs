//! Font resolution and glyph drawing.
//!
//! A [`FontResolver`] walks an ordered list of host font files per family and
//! loads the first one `fontdue` can parse. When nothing on the host works it
//! falls back to the embedded-graphics ASCII mono fonts, so resolution never
//! fails.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use embedded_graphics::mono_font::ascii::{
    FONT_10X20, FONT_4X6, FONT_5X7, FONT_5X8, FONT_6X10, FONT_6X12, FONT_6X13, FONT_6X9,
    FONT_7X14, FONT_9X15, FONT_9X18,
};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use pixelprompt::{FontFamily, Rgb};
use pixelprompt_layout::GlyphMeasurer;

const MONOSPACE_CANDIDATES: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "/System/Library/Fonts/SFNSMono.ttf",
    "/Library/Fonts/Courier New.ttf",
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    // Windows
    "C:\\Windows\\Fonts\\cour.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

const SERIF_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
    "/Library/Fonts/Times New Roman.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/TTF/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
    "C:\\Windows\\Fonts\\times.ttf",
];

const SANS_SERIF_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Built-in fonts by cell height, one per height, narrowest first.
const BUILTIN_FONTS: &[&MonoFont<'static>] = &[
    &FONT_4X6, &FONT_5X7, &FONT_5X8, &FONT_6X9, &FONT_6X10, &FONT_6X12, &FONT_6X13, &FONT_7X14,
    &FONT_9X15, &FONT_9X18, &FONT_10X20,
];

/// Ordered font file candidates per family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontResolver {
    monospace: Vec<PathBuf>,
    serif: Vec<PathBuf>,
    sans_serif: Vec<PathBuf>,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::system()
    }
}

impl FontResolver {
    /// Common install locations on macOS, Linux, and Windows.
    pub fn system() -> Self {
        fn paths(list: &[&str]) -> Vec<PathBuf> {
            list.iter().map(PathBuf::from).collect()
        }
        Self {
            monospace: paths(MONOSPACE_CANDIDATES),
            serif: paths(SERIF_CANDIDATES),
            sans_serif: paths(SANS_SERIF_CANDIDATES),
        }
    }

    /// No candidates at all; every family resolves to the built-in font.
    pub fn builtin_only() -> Self {
        Self {
            monospace: Vec::new(),
            serif: Vec::new(),
            sans_serif: Vec::new(),
        }
    }

    /// Replace the candidate list for `family`.
    pub fn with_candidates<I, P>(mut self, family: FontFamily, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        *self.slot_mut(family) = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn candidates(&self, family: FontFamily) -> &[PathBuf] {
        match family {
            FontFamily::Monospace => &self.monospace,
            FontFamily::Serif => &self.serif,
            FontFamily::SansSerif => &self.sans_serif,
        }
    }

    fn slot_mut(&mut self, family: FontFamily) -> &mut Vec<PathBuf> {
        match family {
            FontFamily::Monospace => &mut self.monospace,
            FontFamily::Serif => &mut self.serif,
            FontFamily::SansSerif => &mut self.sans_serif,
        }
    }

    /// First loadable candidate for `family`, or the built-in font.
    pub fn resolve(&self, family: FontFamily, size_px: u32) -> LoadedFont {
        for path in self.candidates(family) {
            match TrueTypeFont::load(path, size_px) {
                Ok(font) => {
                    log::debug!("loaded {} font from {}", family, path.display());
                    return LoadedFont::TrueType(font);
                }
                Err(reason) => {
                    log::debug!("skipping font {}: {}", path.display(), reason);
                }
            }
        }
        log::info!(
            "no {} font found on host, using built-in {}px mono font",
            family,
            size_px
        );
        LoadedFont::builtin(size_px)
    }
}

/// Which kind of font an engine ended up with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontKind {
    Builtin,
    TrueType,
}

/// Why a font file could not be used.
#[derive(Debug)]
pub enum FontLoadError {
    Io(std::io::Error),
    /// `fontdue` rejected the bytes.
    Parse(&'static str),
}

impl core::fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FontLoadError::Io(err) => write!(f, "read failed: {}", err),
            FontLoadError::Parse(msg) => write!(f, "parse failed: {}", msg),
        }
    }
}

impl std::error::Error for FontLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontLoadError::Io(err) => Some(err),
            FontLoadError::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for FontLoadError {
    fn from(err: std::io::Error) -> Self {
        FontLoadError::Io(err)
    }
}

/// A `fontdue` face fixed at one pixel size.
#[derive(Clone)]
pub struct TrueTypeFont {
    font: Arc<fontdue::Font>,
    size_px: f32,
    ascent: f32,
    line_height: u32,
    path: PathBuf,
}

impl core::fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("path", &self.path)
            .field("size_px", &self.size_px)
            .field("line_height", &self.line_height)
            .finish()
    }
}

impl TrueTypeFont {
    /// Load face 0 of the file at `path`.
    pub fn load(path: &Path, size_px: u32) -> Result<Self, FontLoadError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes, size_px, path.to_path_buf())
    }

    pub fn from_bytes(
        bytes: Vec<u8>,
        size_px: u32,
        path: PathBuf,
    ) -> Result<Self, FontLoadError> {
        let settings = fontdue::FontSettings {
            collection_index: 0,
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(bytes, settings).map_err(FontLoadError::Parse)?;
        let size = size_px.max(1) as f32;
        let (ascent, line_height) = match font.horizontal_line_metrics(size) {
            Some(metrics) => (metrics.ascent, (metrics.ascent - metrics.descent).ceil()),
            None => (size, size.ceil()),
        };
        Ok(Self {
            font: Arc::new(font),
            size_px: size,
            ascent,
            line_height: (line_height as u32).max(1),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn advance(&self, ch: char) -> u32 {
        self.font.metrics(ch, self.size_px).advance_width.ceil().max(0.0) as u32
    }

    fn draw<D>(
        &self,
        target: &mut D,
        text: &str,
        origin: Point,
        text_color: Rgb,
        background: Rgb,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let baseline = origin.y + self.ascent.ceil() as i32;
        let mut pen_x = origin.x as f32;
        for ch in text.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, self.size_px);
            let left = pen_x.round() as i32 + metrics.xmin;
            let top = baseline - (metrics.height as i32 + metrics.ymin);
            let pixels = coverage.iter().enumerate().filter_map(|(idx, alpha)| {
                if *alpha == 0 || metrics.width == 0 {
                    return None;
                }
                let x = left + (idx % metrics.width) as i32;
                let y = top + (idx / metrics.width) as i32;
                Some(Pixel(Point::new(x, y), blend(background, text_color, *alpha)))
            });
            target.draw_iter(pixels)?;
            pen_x += metrics.advance_width;
        }
        Ok(())
    }
}

fn blend(background: Rgb, foreground: Rgb, alpha: u8) -> Rgb888 {
    let mix = |bg: u8, fg: u8| -> u8 {
        let a = u16::from(alpha);
        ((u16::from(bg) * (255 - a) + u16::from(fg) * a + 127) / 255) as u8
    };
    Rgb888::new(
        mix(background.0, foreground.0),
        mix(background.1, foreground.1),
        mix(background.2, foreground.2),
    )
}

/// Font bound to an engine: a host TrueType face or a built-in mono font.
#[derive(Clone, Debug)]
pub enum LoadedFont {
    Builtin(&'static MonoFont<'static>),
    TrueType(TrueTypeFont),
}

impl LoadedFont {
    /// Largest built-in font whose cell height fits `size_px`.
    pub fn builtin(size_px: u32) -> Self {
        let font = BUILTIN_FONTS
            .iter()
            .rev()
            .find(|font| font.character_size.height <= size_px)
            .copied()
            .unwrap_or(&FONT_4X6);
        Self::Builtin(font)
    }

    pub fn kind(&self) -> FontKind {
        match self {
            Self::Builtin(_) => FontKind::Builtin,
            Self::TrueType(_) => FontKind::TrueType,
        }
    }

    /// Paint `text` with its top-left corner at `origin`.
    ///
    /// Only glyph pixels are drawn; the target must already hold `background`.
    pub fn draw_text<D>(
        &self,
        target: &mut D,
        text: &str,
        origin: Point,
        text_color: Rgb,
        background: Rgb,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        match self {
            Self::Builtin(font) => {
                let style = MonoTextStyle::new(
                    *font,
                    Rgb888::new(text_color.0, text_color.1, text_color.2),
                );
                let normalized = normalize_text_for_mono(text);
                Text::with_baseline(normalized.as_ref(), origin, style, Baseline::Top)
                    .draw(target)?;
                Ok(())
            }
            Self::TrueType(font) => font.draw(target, text, origin, text_color, background),
        }
    }
}

impl GlyphMeasurer for LoadedFont {
    fn advance_px(&self, ch: char) -> u32 {
        match self {
            Self::Builtin(font) => font.character_size.width + font.character_spacing,
            Self::TrueType(font) => font.advance(ch),
        }
    }

    fn line_height_px(&self) -> u32 {
        match self {
            Self::Builtin(font) => font.character_size.height,
            Self::TrueType(font) => font.line_height,
        }
    }
}

/// Map typographic punctuation to the ASCII the built-in fonts carry.
fn normalize_text_for_mono(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| {
        matches!(
            ch,
            '\u{00A0}' // nbsp
                | '\u{2013}' // en dash
                | '\u{2014}' // em dash
                | '\u{2018}' // left single quote
                | '\u{2019}' // right single quote
                | '\u{201C}' // left double quote
                | '\u{201D}' // right double quote
                | '\u{2026}' // ellipsis
        )
    }) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{00A0}' => out.push(' '),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2026}' => out.push('.'),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_font_tracks_requested_size() {
        for (size, width, height) in [(6, 4, 6), (7, 5, 7), (9, 6, 9), (11, 6, 10), (20, 10, 20)] {
            let font = LoadedFont::builtin(size);
            assert_eq!(font.advance_px('M'), width, "size {}", size);
            assert_eq!(font.line_height_px(), height, "size {}", size);
        }
    }

    #[test]
    fn builtin_only_resolver_never_touches_disk() {
        let resolver = FontResolver::builtin_only();
        for family in FontFamily::ALL {
            assert!(resolver.candidates(family).is_empty());
            assert_eq!(resolver.resolve(family, 9).kind(), FontKind::Builtin);
        }
    }

    #[test]
    fn unreadable_candidates_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let garbage = dir.path().join("broken.ttf");
        std::fs::write(&garbage, b"not a font").expect("write");
        let resolver = FontResolver::builtin_only().with_candidates(
            FontFamily::Monospace,
            [dir.path().join("missing.ttf"), garbage],
        );
        assert_eq!(resolver.candidates(FontFamily::Monospace).len(), 2);
        assert_eq!(
            resolver.resolve(FontFamily::Monospace, 12).kind(),
            FontKind::Builtin
        );
    }

    #[test]
    fn load_errors_separate_io_from_parse() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = TrueTypeFont::load(&dir.path().join("missing.ttf"), 12)
            .expect_err("missing file must fail");
        match &missing {
            FontLoadError::Io(err) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected io error, got {:?}", other),
        }
        assert!(std::error::Error::source(&missing).is_some());

        let garbage = dir.path().join("broken.ttf");
        std::fs::write(&garbage, b"not a font").expect("write");
        let parse = TrueTypeFont::load(&garbage, 12).expect_err("garbage must fail");
        assert!(matches!(parse, FontLoadError::Parse(_)), "{:?}", parse);
        assert!(parse.to_string().starts_with("parse failed: "));
    }

    #[test]
    fn system_resolver_lists_candidates_for_every_family() {
        let resolver = FontResolver::system();
        for family in FontFamily::ALL {
            assert!(!resolver.candidates(family).is_empty());
        }
    }

    #[test]
    fn mono_normalization_keeps_char_count() {
        let text = "a\u{2014}b \u{201C}c\u{201D}\u{2026}";
        let normalized = normalize_text_for_mono(text);
        assert_eq!(normalized, "a-b \"c\".");
        assert_eq!(normalized.chars().count(), text.chars().count());
        assert!(matches!(normalize_text_for_mono("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn blend_interpolates_between_colors() {
        assert_eq!(blend(Rgb::WHITE, Rgb::BLACK, 0), Rgb888::new(255, 255, 255));
        assert_eq!(blend(Rgb::WHITE, Rgb::BLACK, 255), Rgb888::new(0, 0, 0));
        let mid = blend(Rgb::WHITE, Rgb::BLACK, 128);
        assert!(mid.r() > 120 && mid.r() < 135);
    }
}
