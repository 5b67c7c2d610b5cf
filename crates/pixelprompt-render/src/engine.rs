use core::fmt;

use pixelprompt::{ConfigError, ContentType, RenderConfig};
use pixelprompt_layout::{GlyphMetrics, LayoutEngine, Page};

use crate::font::{FontKind, FontResolver, LoadedFont};
use crate::page::{render_page, PageStyle};
use crate::rendered::RenderedImage;

/// Text-to-image renderer bound to one validated configuration.
///
/// Construction resolves the font and measures glyph metrics once. Every
/// later call reuses them and keeps no per-call state, so a single instance
/// can be shared between threads.
#[derive(Clone, Debug)]
pub struct PixelPrompt {
    config: RenderConfig,
    content_type: Option<ContentType>,
    font: LoadedFont,
    layout: LayoutEngine,
    style: PageStyle,
}

impl PixelPrompt {
    /// Bind `config`, looking for fonts in the usual system locations.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        Self::with_resolver(config, &FontResolver::system())
    }

    /// Bind `config`, resolving the font through `resolver`.
    pub fn with_resolver(config: RenderConfig, resolver: &FontResolver) -> Result<Self, RenderError> {
        let config = config.resolved()?;
        let content_type = config.content_type()?;
        let family = config.font_family()?;
        let font = resolver.resolve(family, config.font_size);
        let style = PageStyle::from_render_config(&config);
        let layout = LayoutEngine::new(&font, style.layout);
        Ok(Self {
            config,
            content_type,
            font,
            layout,
            style,
        })
    }

    /// Configuration in effect, with any content preset applied.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn metrics(&self) -> &GlyphMetrics {
        self.layout.metrics()
    }

    pub fn font_kind(&self) -> FontKind {
        self.font.kind()
    }

    pub fn style(&self) -> &PageStyle {
        &self.style
    }

    /// Render `text` into one image per page.
    ///
    /// JSON content is compacted; other content is minified when enabled.
    /// Either all pages render or an error is returned.
    pub fn render(&self, text: &str) -> Result<Vec<RenderedImage>, RenderError> {
        if text.trim().is_empty() {
            return Err(RenderError::EmptyInput);
        }
        let prepared = if self.content_type == Some(ContentType::Json) {
            pixelprompt::compact_json(text)
        } else if self.config.minify {
            let minified = pixelprompt::minify_text(text);
            if minified.trim().is_empty() {
                return Err(RenderError::EmptyAfterMinify);
            }
            minified
        } else {
            text.to_string()
        };
        let pages = self.layout.layout(&prepared);
        log::debug!(
            "rendering {} chars as {} page(s)",
            prepared.chars().count(),
            pages.len()
        );
        Ok(pages.iter().map(|page| self.render_page(page)).collect())
    }

    /// Render `chunk` as a single page, one row per `\n`-separated line.
    ///
    /// No normalisation or wrapping is applied; rows wider than the image are
    /// clipped. Pair with [`split_text`](Self::split_text) to render a long
    /// input one page at a time.
    pub fn render_chunk(&self, chunk: &str) -> RenderedImage {
        let page = Page::new(chunk.split('\n').map(str::to_string).collect());
        self.render_page(&page)
    }

    fn render_page(&self, page: &Page) -> RenderedImage {
        render_page(page, &self.font, self.layout.metrics(), &self.style)
    }

    pub fn wrap_text(&self, text: &str) -> Vec<String> {
        self.layout.wrap(text)
    }

    pub fn paginate(&self, lines: Vec<String>) -> Vec<Page> {
        self.layout.paginate(lines)
    }

    /// Page-sized text chunks, without rendering them.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.layout.split_text(text)
    }

    pub fn minify_text(text: &str) -> String {
        pixelprompt::minify_text(text)
    }

    pub fn compact_json(text: &str) -> String {
        pixelprompt::compact_json(text)
    }
}

/// Failure to bind a configuration or to render input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Configuration rejected at engine construction.
    Config(ConfigError),
    /// Input is empty or only whitespace.
    EmptyInput,
    /// Input had content, but nothing was left after minification.
    EmptyAfterMinify,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid render config: {}", err),
            Self::EmptyInput => f.write_str("text cannot be empty"),
            Self::EmptyAfterMinify => f.write_str("text is empty after minification"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::EmptyInput | Self::EmptyAfterMinify => None,
        }
    }
}

impl From<ConfigError> for RenderError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}
