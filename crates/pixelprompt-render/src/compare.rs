use pixelprompt::{estimate_text_tokens, pricing_for};
use serde::Serialize;

use crate::engine::{PixelPrompt, RenderError};
use crate::rendered::RenderedImage;

/// Pixel size of one rendered image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Text versus image input cost for one piece of content.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostReport {
    pub text_tokens: u64,
    pub image_tokens: u64,
    pub num_images: usize,
    pub image_dimensions: Vec<ImageDimensions>,
    /// Percent of input tokens saved, one decimal.
    pub input_savings_pct: f64,
    /// USD at input pricing, eight decimals.
    pub text_cost_per_call: f64,
    pub image_cost_per_call: f64,
    /// Model as requested.
    pub model: String,
    /// Pricing table key the model matched.
    pub pricing_model: String,
}

impl CostReport {
    /// Report for `text` already rendered as `images`.
    pub fn from_images(text: &str, images: &[RenderedImage], model: &str) -> Self {
        let text_tokens = estimate_text_tokens(text);
        let image_tokens: u64 = images.iter().map(RenderedImage::tokens).sum();
        let (pricing_model, pricing) = pricing_for(model);
        let savings = if text_tokens == 0 {
            0.0
        } else {
            (text_tokens as f64 - image_tokens as f64) / text_tokens as f64 * 100.0
        };
        Self {
            text_tokens,
            image_tokens,
            num_images: images.len(),
            image_dimensions: images
                .iter()
                .map(|image| ImageDimensions {
                    width: image.width(),
                    height: image.height(),
                })
                .collect(),
            input_savings_pct: round_to(savings, 1),
            text_cost_per_call: round_to(pricing.input_cost(text_tokens), 8),
            image_cost_per_call: round_to(pricing.input_cost(image_tokens), 8),
            model: model.to_string(),
            pricing_model: pricing_model.to_string(),
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl PixelPrompt {
    /// Render `text` and compare its image cost with sending it as text.
    pub fn compare(&self, text: &str, model: &str) -> Result<CostReport, RenderError> {
        let images = self.render(text)?;
        Ok(CostReport::from_images(text, &images, model))
    }
}
