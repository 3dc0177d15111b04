use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use which::which;

use super::{ExportError, PdfRenderer};
use crate::config::ExportConfig;

const DEFAULT_BINARY: &str = "wkhtmltopdf";

/// Renders PDFs by piping HTML through the `wkhtmltopdf` binary.
pub struct WkhtmltopdfRenderer {
    command: String,
    timeout: Duration,
}

impl WkhtmltopdfRenderer {
    pub fn new(command: impl Into<String>, timeout_seconds: u64) -> Self {
        Self {
            command: command.into(),
            timeout: Duration::from_secs(timeout_seconds),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        let command = config
            .wkhtmltopdf_path
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BINARY.to_string());
        Self::new(command, config.timeout_seconds)
    }

    /// Resolve the configured command to an executable path.
    pub fn resolve(&self) -> Result<PathBuf, ExportError> {
        which(&self.command).map_err(|_| ExportError::RendererNotFound(self.command.clone()))
    }

    pub fn is_available(&self) -> bool {
        self.resolve().is_ok()
    }
}

#[async_trait]
impl PdfRenderer for WkhtmltopdfRenderer {
    fn name(&self) -> &'static str {
        "wkhtmltopdf"
    }

    async fn render(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let binary = self.resolve()?;
        info!("Rendering {} chars of HTML with {:?}", html.len(), binary);

        let mut child = tokio::process::Command::new(&binary)
            .args(["--quiet", "--encoding", "utf-8", "-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(ExportError::Spawn)?;

        // Feed stdin concurrently so a renderer streaming output early cannot
        // deadlock against a full pipe.
        let writer = child.stdin.take().map(|mut stdin| {
            let html = html.to_owned();
            tokio::spawn(async move {
                let result = stdin.write_all(html.as_bytes()).await;
                // Dropping stdin signals EOF
                drop(stdin);
                result
            })
        });

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => {
                let output = result?;
                if let Some(writer) = writer {
                    if let Ok(Err(e)) = writer.await {
                        debug!("PDF renderer closed stdin early: {}", e);
                    }
                }
                output
            }
            Err(_) => {
                warn!(
                    "PDF renderer timed out after {}s (process will be killed)",
                    self.timeout.as_secs()
                );
                return Err(ExportError::Timeout(self.timeout.as_secs()));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("PDF renderer exited with {}: {}", output.status, stderr);
            return Err(ExportError::Failed {
                status: output.status.to_string(),
                stderr,
            });
        }

        if output.stdout.is_empty() {
            return Err(ExportError::EmptyOutput);
        }

        debug!("Rendered PDF: {} bytes", output.stdout.len());
        Ok(output.stdout)
    }
}
