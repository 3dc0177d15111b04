//! PDF export of normalized transcripts.
//!
//! The transcript is wrapped in a standalone HTML document and handed to an
//! external renderer. Renderer failures are returned to the caller as-is.

use async_trait::async_trait;
use thiserror::Error;

mod template;
mod wkhtmltopdf;

pub use template::render_pdf_document;
pub use wkhtmltopdf::WkhtmltopdfRenderer;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const PDF_FILE_NAME: &str = "podcast.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF renderer '{0}' not found; install wkhtmltopdf or set export.wkhtmltopdf_path")]
    RendererNotFound(String),

    #[error("failed to start PDF renderer: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("I/O error while talking to PDF renderer: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF renderer exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("PDF renderer produced no output")]
    EmptyOutput,

    #[error("PDF renderer timed out after {0}s")]
    Timeout(u64),
}

/// Converts a complete HTML document into PDF bytes.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn render(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}

/// A rendered PDF ready to be served as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    pub bytes: Vec<u8>,
    pub file_name: &'static str,
}

impl PdfDocument {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            file_name: PDF_FILE_NAME,
        }
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition() {
        let doc = PdfDocument::new(b"%PDF-1.4".to_vec());
        assert_eq!(doc.content_disposition(), "attachment; filename=podcast.pdf");
    }
}
