//! Request pipeline: validate, prompt, generate, normalize, export.
//!
//! [`PodcastService`] holds the collaborators built at startup and is shared
//! by every request handler. It keeps no per-request state.

use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::export::{render_pdf_document, ExportError, PdfDocument, PdfRenderer};
use crate::generation::{GenerationError, TranscriptGenerator};
use crate::normalizer::Normalizer;
use crate::prompt::{GenerationRequest, PromptBuilder, ValidationError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("transcript generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("PDF export failed: {0}")]
    Export(#[from] ExportError),
}

/// Fields submitted by the podcast form or the JSON API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodcastForm {
    pub topic: Option<String>,
    pub podcaster_name: Option<String>,
    pub guest_name: Option<String>,
    pub language: Option<String>,
}

impl PodcastForm {
    pub fn to_request(&self) -> Result<GenerationRequest, ValidationError> {
        GenerationRequest::new(
            self.topic.as_deref(),
            self.podcaster_name.as_deref(),
            self.guest_name.as_deref(),
            self.language.as_deref(),
        )
    }
}

/// Generated transcript before and after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub raw: String,
    pub normalized: String,
}

pub struct PodcastService {
    generator: Arc<dyn TranscriptGenerator>,
    renderer: Arc<dyn PdfRenderer>,
    normalizer: Normalizer,
    prompt_builder: PromptBuilder,
}

impl PodcastService {
    pub fn new(
        generator: Arc<dyn TranscriptGenerator>,
        renderer: Arc<dyn PdfRenderer>,
        normalizer: Normalizer,
    ) -> Self {
        Self {
            generator,
            renderer,
            normalizer,
            prompt_builder: PromptBuilder::new(),
        }
    }

    /// Validate the form and generate a transcript. Invalid forms never reach
    /// the generator.
    pub async fn generate(&self, form: &PodcastForm) -> Result<Transcript, ServiceError> {
        let request = form.to_request().map_err(|e| {
            warn!("Rejected podcast request: {}", e);
            e
        })?;
        self.generate_for(&request).await
    }

    pub async fn generate_for(&self, request: &GenerationRequest) -> Result<Transcript, ServiceError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("generate", %request_id);

        async {
            debug!(
                "Topic: {}, Podcaster: {}, Guest: {}, Language: {}",
                request.topic(),
                request.podcaster_name(),
                request.guest_name(),
                request.language()
            );

            let prompt = self.prompt_builder.build(request);

            info!("Generating podcast conversation with {}", self.generator.name());
            let raw = self.generator.generate(&prompt).await.map_err(|e| {
                error!("Podcast generation failed: {}", e);
                e
            })?;

            let normalized = self.normalizer.run(&raw);
            info!("Podcast conversation generated: {} chars", normalized.len());

            Ok::<_, ServiceError>(Transcript { raw, normalized })
        }
        .instrument(span)
        .await
    }

    /// Render a normalized transcript to a downloadable PDF.
    pub async fn export_pdf(&self, transcript: &str) -> Result<PdfDocument, ServiceError> {
        let html = render_pdf_document(transcript);

        info!("Exporting transcript with {}", self.renderer.name());
        let bytes = self.renderer.render(&html).await.map_err(|e| {
            error!("PDF export failed: {}", e);
            e
        })?;

        Ok(PdfDocument::new(bytes))
    }
}
