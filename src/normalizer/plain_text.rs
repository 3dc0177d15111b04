use crate::normalizer::TranscriptNormalizer;

/// Keeps the model's markdown as-is for `generate --raw`. Only the blank
/// padding models tend to add around the dialogue is removed.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextNormalizer;

impl PlainTextNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptNormalizer for PlainTextNormalizer {
    fn normalize(&self, raw_output: &str) -> String {
        raw_output.trim().to_string()
    }

    fn name(&self) -> &'static str {
        "PlainTextNormalizer"
    }
}
