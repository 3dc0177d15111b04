//! Fake collaborators shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use podcast_forge::export::{ExportError, PdfRenderer};
use podcast_forge::generation::{GenerationError, TranscriptGenerator};
use podcast_forge::normalizer::Normalizer;
use podcast_forge::prompt::Prompt;
use podcast_forge::service::PodcastService;
use std::sync::{Arc, Mutex};

/// Generator that records every prompt and answers with a fixed reply.
pub struct FakeGenerator {
    reply: Result<String, ()>,
    prompts: Mutex<Vec<Prompt>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err(()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptGenerator for FakeGenerator {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(()) => Err(GenerationError::Status {
                status: 401,
                message: "Invalid API Key".to_string(),
            }),
        }
    }
}

/// Renderer that returns a canned PDF header followed by the HTML it received.
pub struct FakeRenderer {
    fail: bool,
    documents: Mutex<Vec<String>>,
}

impl FakeRenderer {
    pub fn working() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            documents: Mutex::new(Vec::new()),
        })
    }

    pub fn broken() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            documents: Mutex::new(Vec::new()),
        })
    }

    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().unwrap().clone()
    }
}

#[async_trait]
impl PdfRenderer for FakeRenderer {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn render(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        self.documents.lock().unwrap().push(html.to_string());
        if self.fail {
            return Err(ExportError::RendererNotFound("wkhtmltopdf".to_string()));
        }
        Ok(b"%PDF-1.4 fake".to_vec())
    }
}

pub fn service(generator: Arc<FakeGenerator>, renderer: Arc<FakeRenderer>) -> PodcastService {
    PodcastService::new(generator, renderer, Normalizer::create(false).unwrap())
}
