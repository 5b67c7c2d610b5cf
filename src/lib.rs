//! Core data, cost model, and text normalisation for `pixelprompt`.
//!
//! This crate holds everything that does not touch pixels: the render
//! configuration and its content presets, the vision-token cost model and
//! pricing table, the text minifier, JSON compaction, and the prompt helpers
//! used when querying rendered content. Layout lives in `pixelprompt-layout`
//! and rasterisation in `pixelprompt-render`.

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

pub mod config;
pub mod cost;
pub mod error;
pub mod prompts;
pub mod text;

pub use config::{
    ContentPreset, ContentType, FontFamily, RenderConfig, Rgb, MAX_FONT_SIZE, MIN_FONT_SIZE,
    MIN_IMAGE_HEIGHT, MIN_IMAGE_WIDTH,
};
pub use cost::{
    estimate_compression_ratio, estimate_image_tokens, estimate_text_tokens, pricing_for,
    ModelPricing, CHARS_PER_TOKEN, DEFAULT_MODEL, MAX_VISION_DIMENSION, MODEL_PRICING,
    TOKENS_PER_PIXEL_DIVISOR,
};
pub use error::ConfigError;
pub use prompts::{image_query, optimize_prompt, PromptStyle};
pub use text::{compact_json, minify_text};
