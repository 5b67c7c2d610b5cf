use crate::metrics::{GlyphMeasurer, GlyphMetrics, LayoutConfig};
use crate::paginate::{paginate, Page};
use crate::wrap::wrap_text;

/// Wrap-and-paginate pipeline bound to one set of glyph metrics.
///
/// Metrics are measured once in [`LayoutEngine::new`] and reused for every
/// call. The engine holds no per-call state and can be shared across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutEngine {
    config: LayoutConfig,
    metrics: GlyphMetrics,
}

impl LayoutEngine {
    pub fn new(measurer: &dyn GlyphMeasurer, config: LayoutConfig) -> Self {
        Self {
            config,
            metrics: GlyphMetrics::measure(measurer, &config),
        }
    }

    /// Engine with precomputed metrics.
    pub fn from_metrics(config: LayoutConfig, metrics: GlyphMetrics) -> Self {
        Self { config, metrics }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn metrics(&self) -> &GlyphMetrics {
        &self.metrics
    }

    pub fn wrap(&self, text: &str) -> Vec<String> {
        wrap_text(text, self.metrics.max_chars_per_line)
    }

    pub fn paginate(&self, lines: Vec<String>) -> Vec<Page> {
        paginate(lines, self.metrics.max_lines_per_page)
    }

    /// Wrap then paginate.
    pub fn layout(&self, text: &str) -> Vec<Page> {
        self.paginate(self.wrap(text))
    }

    /// Per-page text chunks, rows joined with `\n`.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.layout(text).iter().map(Page::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FixedCellMeasurer;

    fn engine(max_width: u32, max_height: u32) -> LayoutEngine {
        LayoutEngine::new(
            &FixedCellMeasurer::new(10, 10),
            LayoutConfig {
                max_width,
                max_height,
                padding: 0,
                line_spacing: 0,
            },
        )
    }

    #[test]
    fn layout_wraps_then_paginates() {
        // 5 chars per row, 2 rows per page
        let engine = engine(50, 20);
        let pages = engine.layout("aaaaa bbbbb ccccc");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines, vec!["aaaaa", "bbbbb"]);
        assert_eq!(pages[1].lines, vec!["ccccc"]);
    }

    #[test]
    fn split_text_joins_page_rows() {
        let engine = engine(50, 20);
        assert_eq!(
            engine.split_text("aaaaa bbbbb ccccc"),
            vec!["aaaaa\nbbbbb".to_string(), "ccccc".to_string()]
        );
    }

    #[test]
    fn metrics_are_fixed_at_construction() {
        let engine = engine(100, 100);
        let before = *engine.metrics();
        let _ = engine.layout(&"word ".repeat(200));
        assert_eq!(*engine.metrics(), before);
        assert_eq!(before.max_chars_per_line, 10);
    }
}
