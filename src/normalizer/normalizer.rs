use anyhow::Result;
use tracing::{debug, info};

use crate::normalizer::{MarkdownHtmlNormalizer, PlainTextNormalizer, TranscriptNormalizer};

/// Enum to hold different normalizer types
pub enum Normalizer {
    MarkdownHtml(MarkdownHtmlNormalizer),
    PlainText(PlainTextNormalizer),
}

impl Normalizer {
    /// Create a normalizer; `raw` keeps the model's markdown untouched
    pub fn create(raw: bool) -> Result<Self> {
        if raw {
            info!("Creating plain text normalizer");
            Ok(Normalizer::PlainText(PlainTextNormalizer::new()))
        } else {
            info!("Creating markdown to HTML normalizer");
            Ok(Normalizer::MarkdownHtml(MarkdownHtmlNormalizer::new()?))
        }
    }

    /// Run normalization using the appropriate normalizer
    pub fn run(&self, raw_output: &str) -> String {
        let normalizer: &dyn TranscriptNormalizer = match self {
            Normalizer::MarkdownHtml(n) => n,
            Normalizer::PlainText(n) => n,
        };
        debug!("Running {}", normalizer.name());
        normalizer.normalize(raw_output)
    }
}
