//! Prompt construction for podcast transcript generation.
//!
//! A [`GenerationRequest`] is validated once at construction time, so every
//! request that reaches [`PromptBuilder::build`] has a topic and fully
//! populated names and language.

use thiserror::Error;

pub const DEFAULT_PODCASTER: &str = "Podcaster";
pub const DEFAULT_GUEST: &str = "Guest";
pub const DEFAULT_LANGUAGE: &str = "English";

/// Message shown to the user when the form is submitted without a topic.
pub const MISSING_TOPIC_MESSAGE: &str = "Please provide a podcast topic.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", MISSING_TOPIC_MESSAGE)]
    MissingTopic,
}

/// A single podcast generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    podcaster_name: String,
    guest_name: String,
    language: String,
}

impl GenerationRequest {
    /// Validate the topic and fill in defaults for absent or blank fields.
    pub fn new(
        topic: Option<&str>,
        podcaster_name: Option<&str>,
        guest_name: Option<&str>,
        language: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let topic = non_blank(topic).ok_or(ValidationError::MissingTopic)?;

        Ok(Self {
            topic,
            podcaster_name: non_blank(podcaster_name)
                .unwrap_or_else(|| DEFAULT_PODCASTER.to_string()),
            guest_name: non_blank(guest_name).unwrap_or_else(|| DEFAULT_GUEST.to_string()),
            language: non_blank(language).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn podcaster_name(&self) -> &str {
        &self.podcaster_name
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// System instruction and seed message for the chat completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, request: &GenerationRequest) -> Prompt {
        Prompt {
            system: self.system_instruction(request),
            user: self.user_message(request),
        }
    }

    fn system_instruction(&self, request: &GenerationRequest) -> String {
        format!(
            "Generate a complete podcast conversation between Podcaster {podcaster} and Guest {guest} \
             on the topic '{topic}' in the language '{language}'.\n\
             The conversation should be fully written in {language} and contain at least 20-30 \
             back-and-forth exchanges.",
            podcaster = request.podcaster_name(),
            guest = request.guest_name(),
            topic = request.topic(),
            language = request.language(),
        )
    }

    fn user_message(&self, request: &GenerationRequest) -> String {
        format!(
            "Let's start a podcast about {}. The podcaster's name is {} and the guest's name is {}.",
            request.topic(),
            request.podcaster_name(),
            request.guest_name(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(topic: &str) -> GenerationRequest {
        GenerationRequest::new(Some(topic), Some("Alex"), Some("Dr. Lee"), Some("French"))
            .unwrap()
    }

    #[test]
    fn test_missing_topic_is_rejected() {
        assert_eq!(
            GenerationRequest::new(None, None, None, None),
            Err(ValidationError::MissingTopic)
        );
        assert_eq!(
            GenerationRequest::new(Some(""), None, None, None),
            Err(ValidationError::MissingTopic)
        );
        assert_eq!(
            GenerationRequest::new(Some(" \t\n "), None, None, None),
            Err(ValidationError::MissingTopic)
        );
    }

    #[test]
    fn test_validation_message_is_user_facing() {
        assert_eq!(
            ValidationError::MissingTopic.to_string(),
            "Please provide a podcast topic."
        );
    }

    #[test]
    fn test_defaults_fill_absent_and_blank_fields() {
        let req = GenerationRequest::new(Some("Rust"), None, Some("  "), Some("")).unwrap();
        assert_eq!(req.podcaster_name(), "Podcaster");
        assert_eq!(req.guest_name(), "Guest");
        assert_eq!(req.language(), "English");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let req = GenerationRequest::new(Some("  Rust  "), Some(" Alex "), None, None).unwrap();
        assert_eq!(req.topic(), "Rust");
        assert_eq!(req.podcaster_name(), "Alex");
    }

    #[test]
    fn test_system_instruction_embeds_all_fields() {
        let prompt = PromptBuilder::new().build(&request("Space Exploration"));
        for needle in ["Space Exploration", "Alex", "Dr. Lee", "French"] {
            assert!(prompt.system.contains(needle), "missing {needle}");
        }
        assert!(prompt.system.contains("20-30 back-and-forth exchanges"));
        assert!(prompt.system.contains("fully written in French"));
    }

    #[test]
    fn test_user_message_restates_topic_and_names() {
        let prompt = PromptBuilder::new().build(&request("Volcanoes"));
        assert_eq!(
            prompt.user,
            "Let's start a podcast about Volcanoes. The podcaster's name is Alex and the guest's name is Dr. Lee."
        );
    }

    #[test]
    fn test_default_names_reach_prompt() {
        let req = GenerationRequest::new(Some("Tea"), None, None, None).unwrap();
        let prompt = PromptBuilder::new().build(&req);
        assert!(prompt.system.contains("Podcaster Podcaster"));
        assert!(prompt.system.contains("Guest Guest"));
        assert!(prompt.system.contains("'English'"));
    }
}
