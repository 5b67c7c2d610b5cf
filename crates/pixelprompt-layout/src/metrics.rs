use core::ops::RangeInclusive;

use pixelprompt::RenderConfig;

/// Glyphs measured to derive the character cell: printable ASCII.
///
/// The widest advance in the set becomes the cell width, so a row of any of
/// these characters never overruns the budget computed from it.
pub const REFERENCE_GLYPHS: RangeInclusive<char> = ' '..='~';

/// Source of glyph advances and line height for one font at one size.
pub trait GlyphMeasurer: Send + Sync {
    /// Horizontal advance of `ch` in whole pixels.
    fn advance_px(&self, ch: char) -> u32;

    /// Height of one text row in pixels, before line spacing.
    fn line_height_px(&self) -> u32;
}

/// Measurer with a fixed cell for every character.
///
/// Useful for headless size estimates and deterministic tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedCellMeasurer {
    pub width: u32,
    pub height: u32,
}

impl FixedCellMeasurer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl GlyphMeasurer for FixedCellMeasurer {
    fn advance_px(&self, _ch: char) -> u32 {
        self.width
    }

    fn line_height_px(&self) -> u32 {
        self.height
    }
}

/// Page box used for metric computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Upper bound on image width.
    pub max_width: u32,
    /// Upper bound on image height.
    pub max_height: u32,
    /// Space between every image edge and the text block.
    pub padding: u32,
    /// Extra pixels between rows.
    pub line_spacing: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::from_render_config(&RenderConfig::default())
    }
}

impl LayoutConfig {
    /// Layout box of a render config. Negative values clamp to zero.
    pub fn from_render_config(config: &RenderConfig) -> Self {
        Self {
            max_width: config.max_width,
            max_height: config.max_height,
            padding: u32::try_from(config.padding).unwrap_or(0),
            line_spacing: u32::try_from(config.line_spacing).unwrap_or(0),
        }
    }
}

/// Character cell and per-image budgets, measured once per engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Widest advance over [`REFERENCE_GLYPHS`], at least 1.
    pub char_width: u32,
    /// Row height reported by the measurer.
    pub char_height: u32,
    /// `char_height` plus line spacing.
    pub line_height: u32,
    /// Characters that fit between the horizontal paddings, at least 1.
    pub max_chars_per_line: usize,
    /// Rows that fit between the vertical paddings, at least 1.
    pub max_lines_per_page: usize,
}

impl GlyphMetrics {
    pub fn measure(measurer: &dyn GlyphMeasurer, config: &LayoutConfig) -> Self {
        let char_width = REFERENCE_GLYPHS
            .map(|ch| measurer.advance_px(ch))
            .max()
            .unwrap_or(0)
            .max(1);
        let char_height = measurer.line_height_px();
        let line_height = char_height.saturating_add(config.line_spacing).max(1);
        let inset = config.padding.saturating_mul(2);
        let usable_width = config.max_width.saturating_sub(inset);
        let usable_height = config.max_height.saturating_sub(inset);
        let metrics = Self {
            char_width,
            char_height,
            line_height,
            max_chars_per_line: ((usable_width / char_width) as usize).max(1),
            max_lines_per_page: ((usable_height / line_height) as usize).max(1),
        };
        log::debug!(
            "glyph metrics: cell {}x{}, line {}px, {} chars x {} lines per page",
            metrics.char_width,
            metrics.char_height,
            metrics.line_height,
            metrics.max_chars_per_line,
            metrics.max_lines_per_page
        );
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_width: u32, max_height: u32, padding: u32, line_spacing: u32) -> LayoutConfig {
        LayoutConfig {
            max_width,
            max_height,
            padding,
            line_spacing,
        }
    }

    #[test]
    fn budgets_follow_the_padded_box() {
        let metrics = GlyphMetrics::measure(&FixedCellMeasurer::new(6, 9), &config(1568, 1568, 5, 1));
        assert_eq!(metrics.char_width, 6);
        assert_eq!(metrics.line_height, 10);
        assert_eq!(metrics.max_chars_per_line, 1558 / 6);
        assert_eq!(metrics.max_lines_per_page, 1558 / 10);
    }

    #[test]
    fn budgets_never_drop_below_one() {
        let metrics = GlyphMetrics::measure(&FixedCellMeasurer::new(20, 20), &config(50, 20, 40, 0));
        assert_eq!(metrics.max_chars_per_line, 1);
        assert_eq!(metrics.max_lines_per_page, 1);
    }

    #[test]
    fn zero_width_glyph_is_treated_as_one_pixel() {
        let metrics = GlyphMetrics::measure(&FixedCellMeasurer::new(0, 8), &config(100, 100, 0, 0));
        assert_eq!(metrics.char_width, 1);
        assert_eq!(metrics.max_chars_per_line, 100);
    }

    struct ProportionalMeasurer;

    impl GlyphMeasurer for ProportionalMeasurer {
        fn advance_px(&self, ch: char) -> u32 {
            match ch {
                'W' => 11,
                'M' => 9,
                'i' | 'l' => 3,
                _ => 6,
            }
        }

        fn line_height_px(&self) -> u32 {
            12
        }
    }

    #[test]
    fn cell_width_is_the_widest_printable_glyph() {
        let metrics = GlyphMetrics::measure(&ProportionalMeasurer, &config(120, 100, 5, 0));
        assert_eq!(metrics.char_width, 11);
        assert_eq!(metrics.max_chars_per_line, 10);
    }

    #[test]
    fn render_config_maps_to_layout_box() {
        let render = RenderConfig {
            padding: 3,
            line_spacing: 2,
            max_width: 800,
            ..RenderConfig::default()
        };
        let layout = LayoutConfig::from_render_config(&render);
        assert_eq!(layout, config(800, 1568, 3, 2));
    }
}
