/// Wrap a normalized transcript in the standalone document fed to the renderer.
///
/// The transcript is inserted verbatim; its `<h5>` fragments are meant to render.
pub fn render_pdf_document(transcript: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Podcast Transcript</title>
<style>
body {{ font-family: Georgia, serif; font-size: 12pt; line-height: 1.5; margin: 2em; }}
h1 {{ font-size: 20pt; border-bottom: 1px solid #999; padding-bottom: 0.3em; }}
h5 {{ font-size: 12pt; margin: 1em 0 0.2em 0; }}
.transcript {{ white-space: pre-wrap; }}
</style>
</head>
<body>
<h1>Podcast Transcript</h1>
<div class="transcript">{transcript}</div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_is_embedded_verbatim() {
        let doc = render_pdf_document("<h5>Intro</h5>\nAlex & Lee");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<div class="transcript"><h5>Intro</h5>
Alex & Lee</div>"#));
        assert!(doc.contains(r#"<meta charset="utf-8">"#));
    }
}
