//! Font resolution, rasterization, and export for `pixelprompt`.
//!
//! [`PixelPrompt`] is the entry point: bind a [`RenderConfig`] once, then
//! call [`PixelPrompt::render`] to turn text into token-cheap PNG pages.
//!
//! ```no_run
//! use pixelprompt_render::{PixelPrompt, RenderConfig};
//!
//! let engine = PixelPrompt::new(RenderConfig::for_content("prose")?)?;
//! for image in engine.render("Some long document...")? {
//!     println!("{}x{} = {} tokens", image.width(), image.height(), image.tokens());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

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

mod canvas;
mod compare;
mod engine;
mod font;
mod page;
mod rendered;

pub use canvas::Canvas;
pub use compare::{CostReport, ImageDimensions};
pub use engine::{PixelPrompt, RenderError};
pub use font::{FontKind, FontLoadError, FontResolver, LoadedFont, TrueTypeFont};
pub use page::{render_page, PageStyle};
pub use pixelprompt::{ConfigError, RenderConfig, Rgb};
pub use rendered::{ContentBlock, ExportError, ImageSource, RenderedImage};
