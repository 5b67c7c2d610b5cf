//! Prompt helpers for querying image-rendered content.
//!
//! Models asked about rendered text tend to answer at much greater length
//! than the same question over plain text. Appending an explicit brevity
//! instruction keeps output tokens from eating the input savings.

use core::fmt;
use core::str::FromStr;

use crate::error::ConfigError;

/// General-purpose brevity instruction.
pub const CONCISE_SUFFIX: &str = "Answer with ONLY the answer value. No explanation, no preamble.";
/// Instruction for value-extraction questions.
pub const EXTRACT_SUFFIX: &str = "Extract and return ONLY the requested value. Nothing else.";
/// Instruction for structured output such as JSON or lists.
pub const STRUCTURED_SUFFIX: &str =
    "Return ONLY the result in the requested format. No commentary.";
/// Lead-in used by [`image_query`] when no context instruction is given.
pub const DEFAULT_CONTEXT_INSTRUCTION: &str = "Based on the content shown in the image(s):";

/// Which suffix [`optimize_prompt`] appends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PromptStyle {
    #[default]
    Concise,
    Extract,
    Structured,
    /// Leave the prompt untouched.
    None,
}

impl PromptStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Concise => "concise",
            Self::Extract => "extract",
            Self::Structured => "structured",
            Self::None => "none",
        }
    }

    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Concise => Some(CONCISE_SUFFIX),
            Self::Extract => Some(EXTRACT_SUFFIX),
            Self::Structured => Some(STRUCTURED_SUFFIX),
            Self::None => None,
        }
    }
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concise" => Ok(Self::Concise),
            "extract" => Ok(Self::Extract),
            "structured" => Ok(Self::Structured),
            "none" => Ok(Self::None),
            other => Err(ConfigError::UnknownPromptStyle(other.to_string())),
        }
    }
}

/// Append the style's brevity instruction to `prompt`.
///
/// A prompt that already ends with the instruction is returned as-is.
/// Otherwise trailing whitespace is trimmed and a period is added unless the
/// prompt already ends in `.`, `?`, `!`, or `:`.
pub fn optimize_prompt(prompt: &str, style: PromptStyle) -> String {
    let Some(suffix) = style.suffix() else {
        return prompt.to_string();
    };
    let trimmed = prompt.trim_end();
    if trimmed.ends_with(suffix) {
        return prompt.to_string();
    }
    let mut out = String::with_capacity(trimmed.len() + suffix.len() + 2);
    out.push_str(trimmed);
    if !trimmed.ends_with(['.', '?', '!', ':']) {
        out.push('.');
    }
    out.push(' ');
    out.push_str(suffix);
    out
}

/// Full prompt for a question about rendered images.
///
/// Prefixes the question with `context_instruction` (or
/// [`DEFAULT_CONTEXT_INSTRUCTION`]) and applies [`optimize_prompt`].
pub fn image_query(question: &str, style: PromptStyle, context_instruction: Option<&str>) -> String {
    let context = context_instruction.unwrap_or(DEFAULT_CONTEXT_INSTRUCTION);
    let full = format!("{} {}", context.trim_end(), question.trim());
    optimize_prompt(&full, style)
}
