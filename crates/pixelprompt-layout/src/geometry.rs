use crate::metrics::{GlyphMetrics, LayoutConfig};
use crate::paginate::Page;

pub use pixelprompt::{MIN_IMAGE_HEIGHT, MIN_IMAGE_WIDTH};

/// Whether each image axis shrinks to fit its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sizing {
    pub dynamic_width: bool,
    pub dynamic_height: bool,
}

impl Default for Sizing {
    fn default() -> Self {
        Self {
            dynamic_width: true,
            dynamic_height: true,
        }
    }
}

impl Sizing {
    /// Both axes fixed at the configured maximum.
    pub const FIXED: Sizing = Sizing {
        dynamic_width: false,
        dynamic_height: false,
    };
}

/// Final pixel size of the image for `page`.
///
/// Dynamic axes fit the text block plus padding, bounded below by
/// [`MIN_IMAGE_WIDTH`]/[`MIN_IMAGE_HEIGHT`] and above by the configured
/// maximum. When the two bounds conflict the maximum wins. Fixed axes use the
/// maximum directly.
pub fn page_size(
    page: &Page,
    metrics: &GlyphMetrics,
    config: &LayoutConfig,
    sizing: Sizing,
) -> (u32, u32) {
    let inset = u64::from(config.padding) * 2;
    let width = if sizing.dynamic_width {
        let content = page.longest_line_chars() as u64 * u64::from(metrics.char_width) + inset;
        clamp_axis(content, MIN_IMAGE_WIDTH, config.max_width)
    } else {
        config.max_width
    };
    let height = if sizing.dynamic_height {
        let content = page.line_count() as u64 * u64::from(metrics.line_height) + inset;
        clamp_axis(content, MIN_IMAGE_HEIGHT, config.max_height)
    } else {
        config.max_height
    };
    (width, height)
}

fn clamp_axis(content: u64, min: u32, max: u32) -> u32 {
    let clamped = content.max(u64::from(min)).min(u64::from(max));
    u32::try_from(clamped).unwrap_or(max)
}

/// Top-left corner of text row `row`.
pub fn line_origin(row: usize, metrics: &GlyphMetrics, padding: u32) -> (u32, u32) {
    let row = u32::try_from(row).unwrap_or(u32::MAX);
    let y = padding.saturating_add(row.saturating_mul(metrics.line_height));
    (padding, y)
}
