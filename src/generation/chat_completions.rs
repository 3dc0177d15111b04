use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use super::{GenerationError, TranscriptGenerator};
use crate::config::GenerationConfig;
use crate::prompt::Prompt;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
    r#type: Option<String>,
    code: Option<String>,
}

/// Client for any OpenAI-compatible `/chat/completions` endpoint (Groq by default).
pub struct ChatCompletionsClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ChatCompletionsClient {
    pub fn from_config(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(GenerationError::MissingApiKey)?
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let endpoint = config.endpoint.trim().trim_end_matches('/').to_string();

        info!(
            "Initialized chat completions client with endpoint: {} (model {})",
            endpoint, config.model
        );

        Ok(Self {
            client,
            endpoint,
            model: config.model.clone(),
            api_key,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl TranscriptGenerator for ChatCompletionsClient {
    fn name(&self) -> &'static str {
        "Chat Completions API"
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
        };

        debug!("Sending chat completion request to {}", self.request_url());

        let response = self
            .client
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!(
                "Chat completion request failed with status {}: {}",
                status, response_text
            );
            return Err(status_error(status.as_u16(), &response_text));
        }

        let text = parse_completion(&response_text)?;
        info!("Generation complete: {} chars", text.len());

        Ok(text)
    }
}

fn status_error(status: u16, body: &str) -> GenerationError {
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => format!(
            "{} (type: {:?}, code: {:?})",
            error_response.error.message, error_response.error.r#type, error_response.error.code
        ),
        Err(_) => body.to_string(),
    };
    GenerationError::Status { status, message }
}

fn parse_completion(body: &str) -> Result<String, GenerationError> {
    let payload: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Parse(e.to_string()))?;

    payload
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(GenerationError::EmptyResponse)
}
