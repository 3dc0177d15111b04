//! Transcript generation through a hosted chat-completions model.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::config::GenerationConfig;
use crate::prompt::Prompt;

mod chat_completions;

pub use chat_completions::ChatCompletionsClient;

/// Errors returned by the generation collaborator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no API key configured; set generation.api_key or GROQ_APIKEY")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("generation request timed out")]
    Timeout,

    #[error("generation API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to parse generation response: {0}")]
    Parse(String),

    #[error("generation API returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GenerationError::Timeout
        } else {
            GenerationError::Request(e.to_string())
        }
    }
}

/// Produces a raw transcript for a prompt. One call, no retries.
#[async_trait]
pub trait TranscriptGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError>;
}

/// Build the configured generator.
pub fn build_generator(
    config: &GenerationConfig,
) -> Result<Box<dyn TranscriptGenerator>, GenerationError> {
    let generator = ChatCompletionsClient::from_config(config)?;
    info!("Using {} for generation", generator.name());
    Ok(Box::new(generator))
}
