//! `generate` subcommand: one podcast straight to stdout.

use anyhow::{Context, Result};
use tracing::info;

use super::args::GenerateCliArgs;
use crate::app::build_service;
use crate::config::Config;
use crate::service::PodcastForm;

pub async fn handle_generate_command(args: GenerateCliArgs) -> Result<()> {
    let config = Config::load()?;
    let service = build_service(&config, args.raw)?;

    let form = PodcastForm {
        topic: Some(args.topic),
        podcaster_name: args.podcaster_name,
        guest_name: args.guest_name,
        language: args.language,
    };

    let transcript = service.generate(&form).await?;
    println!("{}", transcript.normalized);

    if let Some(path) = args.pdf {
        let document = service.export_pdf(&transcript.normalized).await?;
        tokio::fs::write(&path, &document.bytes)
            .await
            .with_context(|| format!("Failed to write PDF to {}", path.display()))?;
        info!("Wrote {} bytes to {}", document.bytes.len(), path.display());
    }

    Ok(())
}
