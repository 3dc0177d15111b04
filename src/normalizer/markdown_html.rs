use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::normalizer::{Rule, TranscriptNormalizer, MARKDOWN_RULES};

struct CompiledRule {
    name: &'static str,
    regex: Regex,
    replacement: &'static str,
}

/// Rewrites markdown emphasis, bullets and headings into HTML fragments.
///
/// Model output is trusted: existing `<`, `>` and `&` pass through unescaped.
pub struct MarkdownHtmlNormalizer {
    rules: Vec<CompiledRule>,
}

impl MarkdownHtmlNormalizer {
    pub fn new() -> Result<Self> {
        Self::with_rules(MARKDOWN_RULES)
    }

    pub fn with_rules(rules: &[Rule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| -> Result<CompiledRule> {
                let regex = Regex::new(rule.pattern)
                    .with_context(|| format!("Invalid pattern for rule '{}'", rule.name))?;
                Ok(CompiledRule {
                    name: rule.name,
                    regex,
                    replacement: rule.replacement,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }
}

impl TranscriptNormalizer for MarkdownHtmlNormalizer {
    fn normalize(&self, raw_output: &str) -> String {
        let mut text = raw_output.to_string();

        for rule in &self.rules {
            let replaced = rule.regex.replace_all(&text, rule.replacement);
            if let std::borrow::Cow::Owned(updated) = replaced {
                debug!("Rule '{}' rewrote transcript", rule.name);
                text = updated;
            }
        }

        debug!(
            "Normalized {} chars to {} chars",
            raw_output.len(),
            text.len()
        );

        text
    }

    fn name(&self) -> &'static str {
        "MarkdownHtmlNormalizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(input: &str) -> String {
        MarkdownHtmlNormalizer::new().unwrap().normalize(input)
    }

    #[test]
    fn test_mixed_markers() {
        let input = "**Intro**\n* first point\n## Section One\n# Title\n";
        let expected = "<h5>Intro</h5>\nfirst point\n<h5>Section One</h5>\n<h5>Title</h5>\n";

        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_unterminated_heading_is_left_alone() {
        assert_eq!(normalize("# Title"), "# Title");
        assert_eq!(normalize("## Title"), "## Title");
        assert_eq!(normalize("# A\n# B"), "<h5>A</h5>\n# B");
    }

    #[test]
    fn test_bullet_whitespace_is_stripped() {
        assert_eq!(normalize("*   indented point"), "indented point");
    }

    #[test]
    fn test_second_pass_is_noop() {
        let once = normalize("**bold**");
        assert_eq!(once, "<h5>bold</h5>");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_text_without_markers_is_unchanged() {
        let input = "Alex: Welcome to the show!\nDr. Lee: Thanks for having me.";
        assert_eq!(normalize(input), input);
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_html_passes_through_unescaped() {
        let input = "<b>Alex</b> & Lee > everyone\n";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_three_hash_heading_keeps_leading_hash() {
        // `### ` is not a `## ` or `# ` line start, so it survives untouched.
        assert_eq!(normalize("### Deep\n"), "### Deep\n");
    }

    #[test]
    fn test_bold_speaker_labels() {
        let input = "**Alex:** Hello\n**Dr. Lee:** Hi";
        let expected = "<h5>Alex:</h5> Hello\n<h5>Dr. Lee:</h5> Hi";
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_invalid_rule_is_reported() {
        let rules = [Rule {
            name: "broken",
            pattern: "(",
            replacement: "",
        }];
        let err = match MarkdownHtmlNormalizer::with_rules(&rules) {
            Ok(_) => panic!("expected invalid pattern to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("broken"));
    }
}
