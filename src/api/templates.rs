//! HTML pages served to the browser.
//!
//! Values echoed back from the form are escaped. Transcripts are inserted as
//! HTML because the normalizer emits `<h5>` fragments meant to render.

use axum::http::StatusCode;

use crate::prompt::{DEFAULT_GUEST, DEFAULT_LANGUAGE, DEFAULT_PODCASTER};
use crate::service::PodcastForm;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
nav a { margin-right: 1rem; }
form label { display: block; margin-top: 0.8rem; font-weight: 600; }
form input { width: 100%; padding: 0.4rem; box-sizing: border-box; }
button { margin-top: 1rem; padding: 0.5rem 1.2rem; }
.error { color: #b00020; font-weight: 600; }
.transcript { white-space: pre-wrap; line-height: 1.5; }
.transcript h5 { font-size: 1rem; margin: 1rem 0 0.2rem 0; }
"#;

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/services">Create a podcast</a></nav>
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn index_page() -> String {
    layout(
        "Podcast Generator",
        r#"<h1>Podcast Generator</h1>
<p>Pick a topic, name your host and guest, choose a language, and get a full podcast transcript you can read or download as a PDF.</p>
<p><a href="/services">Start a new podcast</a></p>"#,
    )
}

pub fn services_page(form: &PodcastForm, error: Option<&str>) -> String {
    let error_html = error
        .map(|message| format!(r#"<p class="error">{}</p>"#, escape_html(message)))
        .unwrap_or_default();

    let value = |field: &Option<String>| escape_html(field.as_deref().unwrap_or(""));

    let body = format!(
        r#"<h1>Create a podcast</h1>
{error_html}
<form method="post" action="/services">
<label for="topic">Topic</label>
<input id="topic" name="topic" value="{topic}" required>
<label for="podcaster_name">Podcaster name</label>
<input id="podcaster_name" name="podcaster_name" value="{podcaster}" placeholder="{default_podcaster}">
<label for="guest_name">Guest name</label>
<input id="guest_name" name="guest_name" value="{guest}" placeholder="{default_guest}">
<label for="language">Language</label>
<input id="language" name="language" value="{language}" placeholder="{default_language}">
<button type="submit">Generate</button>
</form>"#,
        topic = value(&form.topic),
        podcaster = value(&form.podcaster_name),
        guest = value(&form.guest_name),
        language = value(&form.language),
        default_podcaster = DEFAULT_PODCASTER,
        default_guest = DEFAULT_GUEST,
        default_language = DEFAULT_LANGUAGE,
    );

    layout("Create a podcast", &body)
}

pub fn result_page(transcript: Option<&str>) -> String {
    let body = match transcript {
        Some(transcript) => format!(
            r#"<h1>Your podcast</h1>
<div class="transcript">{transcript}</div>
<form method="get" action="/download_pdf">
<input type="hidden" name="podcast_script" value="{script}">
<button type="submit">Download PDF</button>
</form>"#,
            script = escape_html(transcript),
        ),
        None => r#"<h1>Your podcast</h1>
<p>No podcast has been generated yet. <a href="/services">Create one</a>.</p>"#
            .to_string(),
    };

    layout("Your podcast", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"<h1>Something went wrong</h1>
<p class="error">{message}</p>
<p>Status: {status}</p>
<p><a href="/services">Back to the form</a></p>"#,
        message = escape_html(message),
    );
    layout("Error", &body)
}
