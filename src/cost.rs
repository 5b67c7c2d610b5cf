//! Vision-token cost model and per-model pricing.

/// Pixels per vision token.
pub const TOKENS_PER_PIXEL_DIVISOR: u64 = 750;
/// Longest image side accepted before the model downscales.
pub const MAX_VISION_DIMENSION: u32 = 1568;
/// Characters per token in the naive text estimate.
pub const CHARS_PER_TOKEN: u64 = 4;

/// Estimated token cost of an image of `width` x `height` pixels.
///
/// Images whose longest side exceeds [`MAX_VISION_DIMENSION`] are scaled
/// down proportionally first, truncating to whole pixels. The result is
/// never below 1.
pub fn estimate_image_tokens(width: u32, height: u32) -> u64 {
    let (mut w, mut h) = (u64::from(width), u64::from(height));
    let longest = w.max(h);
    let limit = u64::from(MAX_VISION_DIMENSION);
    if longest > limit {
        let scale = limit as f64 / longest as f64;
        w = (w as f64 * scale) as u64;
        h = (h as f64 * scale) as u64;
    }
    ((w * h) / TOKENS_PER_PIXEL_DIVISOR).max(1)
}

/// Naive text-token estimate: one token per four characters.
///
/// Empty text costs nothing; anything else costs at least one token.
pub fn estimate_text_tokens(text: &str) -> u64 {
    if text.is_empty() {
        return 0;
    }
    (text.chars().count() as u64 / CHARS_PER_TOKEN).max(1)
}

/// Ratio of text tokens to image tokens for the same content.
///
/// `total_image_tokens` is the summed [`estimate_image_tokens`] of every
/// rendered page, not an image count. Zero is treated as one.
pub fn estimate_compression_ratio(text: &str, total_image_tokens: u64) -> f64 {
    estimate_text_tokens(text) as f64 / total_image_tokens.max(1) as f64
}

/// USD per million tokens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPricing {
    pub input: f64,
    pub output: f64,
}

impl ModelPricing {
    /// Cost of sending `tokens` input tokens.
    pub fn input_cost(&self, tokens: u64) -> f64 {
        tokens as f64 * self.input / 1_000_000.0
    }

    /// Cost of receiving `tokens` output tokens.
    pub fn output_cost(&self, tokens: u64) -> f64 {
        tokens as f64 * self.output / 1_000_000.0
    }
}

/// Model used when a requested identifier matches no table entry.
pub const DEFAULT_MODEL: &str = "claude-opus-4-6";

/// Known models, matched by substring in table order.
pub const MODEL_PRICING: &[(&str, ModelPricing)] = &[
    (
        "claude-opus-4-6",
        ModelPricing {
            input: 5.0,
            output: 25.0,
        },
    ),
    (
        "claude-sonnet-4-5",
        ModelPricing {
            input: 3.0,
            output: 15.0,
        },
    ),
    (
        "claude-haiku-4-5",
        ModelPricing {
            input: 1.0,
            output: 5.0,
        },
    ),
];

/// Pricing entry for `model`, plus the table key that matched.
///
/// The first key contained in `model` wins, so dated identifiers such as
/// `claude-sonnet-4-5-20250929` resolve to their family. Unknown models get
/// the [`DEFAULT_MODEL`] entry.
pub fn pricing_for(model: &str) -> (&'static str, ModelPricing) {
    MODEL_PRICING
        .iter()
        .find(|(key, _)| model.contains(key))
        .or_else(|| MODEL_PRICING.iter().find(|(key, _)| *key == DEFAULT_MODEL))
        .copied()
        .unwrap_or((
            DEFAULT_MODEL,
            ModelPricing {
                input: 5.0,
                output: 25.0,
            },
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_tokens_follow_pixel_area() {
        assert_eq!(estimate_image_tokens(750, 750), 750);
        assert_eq!(estimate_image_tokens(100, 100), 13);
        assert_eq!(estimate_image_tokens(1568, 1568), 3278);
    }

    #[test]
    fn tiny_images_cost_at_least_one_token() {
        assert_eq!(estimate_image_tokens(1, 1), 1);
        assert_eq!(estimate_image_tokens(0, 0), 1);
        assert_eq!(estimate_image_tokens(10, 10), 1);
    }

    #[test]
    fn oversized_images_are_scaled_before_costing() {
        assert_eq!(
            estimate_image_tokens(3136, 3136),
            estimate_image_tokens(1568, 1568)
        );
        // 3136x1000 scales to 1568x500
        assert_eq!(estimate_image_tokens(3136, 1000), 1568 * 500 / 750);
        assert!(estimate_image_tokens(5000, 200) <= 3278);
    }

    #[test]
    fn text_tokens_use_four_chars_per_token() {
        assert_eq!(estimate_text_tokens(""), 0);
        assert_eq!(estimate_text_tokens("abc"), 1);
        assert_eq!(estimate_text_tokens("abcdefgh"), 2);
        assert_eq!(estimate_text_tokens(&"x".repeat(4000)), 1000);
        // four scalar values, twelve bytes
        assert_eq!(estimate_text_tokens("日本語!"), 1);
    }

    #[test]
    fn compression_ratio_guards_zero_image_tokens() {
        let text = "x".repeat(400);
        assert_eq!(estimate_compression_ratio(&text, 10), 10.0);
        assert_eq!(estimate_compression_ratio(&text, 0), 100.0);
    }

    #[test]
    fn compression_ratio_takes_summed_page_tokens() {
        let text = "x".repeat(4000);
        let pages = estimate_image_tokens(750, 750) + estimate_image_tokens(100, 100);
        assert_eq!(pages, 763);
        assert_eq!(estimate_compression_ratio(&text, pages), 1000.0 / 763.0);
    }

    #[test]
    fn pricing_matches_by_substring_and_falls_back() {
        let (key, pricing) = pricing_for("claude-sonnet-4-5-20250929");
        assert_eq!(key, "claude-sonnet-4-5");
        assert_eq!(pricing.input, 3.0);

        let (key, pricing) = pricing_for("gpt-unknown");
        assert_eq!(key, DEFAULT_MODEL);
        assert_eq!(pricing.output, 25.0);
    }

    #[test]
    fn input_cost_is_per_million_tokens() {
        let (_, pricing) = pricing_for("claude-haiku-4-5");
        assert!((pricing.input_cost(1_000_000) - 1.0).abs() < 1e-12);
        assert!((pricing.output_cost(200_000) - 1.0).abs() < 1e-12);
    }
}
