mod markdown_html;
mod normalizer;
mod plain_text;
mod rules;
mod transcript_normalizer;

pub use markdown_html::MarkdownHtmlNormalizer;
pub use normalizer::Normalizer;
pub use plain_text::PlainTextNormalizer;
pub use rules::{Rule, MARKDOWN_RULES};
pub use transcript_normalizer::TranscriptNormalizer;
