//! Glyph metrics, word wrapping, pagination, and page geometry for
//! `pixelprompt`.
//!
//! Nothing here touches pixels. A [`GlyphMeasurer`] supplies advance widths
//! and line height, [`GlyphMetrics`] turns them into per-image character and
//! line budgets, and the wrap/paginate steps split text into [`Page`]s that
//! the renderer paints one image at a time.

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

mod engine;
mod geometry;
mod metrics;
mod paginate;
mod wrap;

pub use engine::LayoutEngine;
pub use geometry::{line_origin, page_size, Sizing, MIN_IMAGE_HEIGHT, MIN_IMAGE_WIDTH};
pub use metrics::{FixedCellMeasurer, GlyphMeasurer, GlyphMetrics, LayoutConfig, REFERENCE_GLYPHS};
pub use paginate::{paginate, Page};
pub use wrap::wrap_text;
