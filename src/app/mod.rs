use crate::api::ApiServer;
use crate::config::Config;
use crate::export::{PdfRenderer, WkhtmltopdfRenderer};
use crate::generation::{build_generator, TranscriptGenerator};
use crate::normalizer::Normalizer;
use crate::service::PodcastService;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Host/port overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
}

pub async fn run_service(options: ServeOptions) -> Result<()> {
    info!("Starting podcast-forge service");

    let config = Config::load()?;
    let service = build_service(&config, false)?;

    let host = options.host.unwrap_or_else(|| config.server.host.clone());
    let port = options.port.unwrap_or(config.server.port);

    ApiServer::new(host, port, service).start().await
}

/// Wire the collaborators described by `config` into a service.
pub fn build_service(config: &Config, raw: bool) -> Result<PodcastService> {
    let generator: Arc<dyn TranscriptGenerator> = Arc::from(
        build_generator(&config.generation).context("Failed to initialize generation client")?,
    );

    let wkhtmltopdf = WkhtmltopdfRenderer::from_config(&config.export);
    if !wkhtmltopdf.is_available() {
        warn!("wkhtmltopdf not found; PDF downloads will fail until it is installed");
    }
    let renderer: Arc<dyn PdfRenderer> = Arc::new(wkhtmltopdf);

    let normalizer = Normalizer::create(raw)?;

    Ok(PodcastService::new(generator, renderer, normalizer))
}
