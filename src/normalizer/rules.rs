/// A single regex rewrite applied by [`super::MarkdownHtmlNormalizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

/// Markdown markers the model tends to emit, rewritten to HTML.
///
/// Order matters. Bold runs first so `**` is gone before the bullet rule
/// looks for a leading `*`, and `## ` runs before `# ` so two-hash headings
/// are not half-consumed by the one-hash rule. Headings only match when the
/// line is newline-terminated; a trailing unterminated heading stays literal.
pub const MARKDOWN_RULES: &[Rule] = &[
    Rule {
        name: "bold",
        pattern: r"\*\*(.*?)\*\*",
        replacement: "<h5>${1}</h5>",
    },
    Rule {
        name: "bullet",
        pattern: r"(?m)^\*\s*",
        replacement: "",
    },
    Rule {
        name: "subheading",
        pattern: r"(?m)^## (.*?)\n",
        replacement: "<h5>${1}</h5>\n",
    },
    Rule {
        name: "heading",
        pattern: r"(?m)^# (.*?)\n",
        replacement: "<h5>${1}</h5>\n",
    },
];
