use embedded_graphics::prelude::Point;
use pixelprompt::{estimate_image_tokens, RenderConfig, Rgb};
use pixelprompt_layout::{line_origin, page_size, GlyphMetrics, LayoutConfig, Page, Sizing};

use crate::canvas::Canvas;
use crate::font::LoadedFont;
use crate::rendered::RenderedImage;

/// Visual parameters shared by every page of one engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageStyle {
    pub layout: LayoutConfig,
    pub sizing: Sizing,
    pub background: Rgb,
    pub text_color: Rgb,
}

impl PageStyle {
    pub fn from_render_config(config: &RenderConfig) -> Self {
        Self {
            layout: LayoutConfig::from_render_config(config),
            sizing: Sizing {
                dynamic_width: config.dynamic_width,
                dynamic_height: config.dynamic_height,
            },
            background: config.background_color,
            text_color: config.text_color,
        }
    }
}

/// Paint `page` into a new image sized by the style's sizing policy.
///
/// The token cost is computed from the final dimensions, so shrinking a
/// dynamic axis is reflected in [`RenderedImage::tokens`].
pub fn render_page(
    page: &Page,
    font: &LoadedFont,
    metrics: &GlyphMetrics,
    style: &PageStyle,
) -> RenderedImage {
    let (width, height) = page_size(page, metrics, &style.layout, style.sizing);
    let mut canvas = Canvas::new(width, height, style.background);
    for (row, line) in page.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let (x, y) = line_origin(row, metrics, style.layout.padding);
        if y >= height {
            break;
        }
        let origin = Point::new(x as i32, y as i32);
        let Ok(()) = font.draw_text(&mut canvas, line, origin, style.text_color, style.background);
    }
    let tokens = estimate_image_tokens(width, height);
    RenderedImage::with_tokens(canvas.into_image(), tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(config: &RenderConfig) -> (LoadedFont, GlyphMetrics, PageStyle) {
        let font = LoadedFont::builtin(config.font_size);
        let style = PageStyle::from_render_config(config);
        let metrics = GlyphMetrics::measure(&font, &style.layout);
        (font, metrics, style)
    }

    #[test]
    fn dynamic_page_is_fitted_and_tagged() {
        let config = RenderConfig::default();
        let (font, metrics, style) = setup(&config);
        let page = Page::new(vec!["Hello, World!".into()]);
        let image = render_page(&page, &font, &metrics, &style);
        assert_eq!((image.width(), image.height()), (88, 20));
        assert_eq!(image.tokens(), estimate_image_tokens(88, 20));
    }

    #[test]
    fn text_pixels_use_text_color() {
        let config = RenderConfig {
            text_color: Rgb(200, 0, 0),
            ..RenderConfig::default()
        };
        let (font, metrics, style) = setup(&config);
        let page = Page::new(vec!["MMMM".into()]);
        let image = render_page(&page, &font, &metrics, &style);
        let inked = image
            .as_rgb()
            .pixels()
            .filter(|p| p.0 == [200, 0, 0])
            .count();
        assert!(inked > 0);
        assert!(image.as_rgb().pixels().all(|p| p.0 == [200, 0, 0] || p.0 == [255, 255, 255]));
    }

    #[test]
    fn fixed_page_uses_maximum_size() {
        let config = RenderConfig {
            dynamic_width: false,
            dynamic_height: false,
            max_width: 300,
            max_height: 200,
            ..RenderConfig::default()
        };
        let (font, metrics, style) = setup(&config);
        let image = render_page(&Page::default(), &font, &metrics, &style);
        assert_eq!((image.width(), image.height()), (300, 200));
        assert!(image.as_rgb().pixels().all(|p| p.0 == [255, 255, 255]));
    }
}
