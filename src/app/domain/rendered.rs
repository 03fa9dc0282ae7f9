/// Shown in the preview when the document is blank.
pub const PLACEHOLDER_HTML: &str =
    "<p class=\"placeholder\"><em>Start typing to see the preview...</em></p>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Blank document; parser and sanitizer were not invoked.
    Placeholder,
    /// Parsed and sanitized markdown.
    Html,
    /// The parser failed; `html` holds the inline error block.
    Error,
}

/// Sanitized HTML ready for the preview region. Replaced wholesale on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub kind: OutputKind,
    pub html: String,
}

impl RenderedOutput {
    pub fn placeholder() -> Self {
        Self {
            kind: OutputKind::Placeholder,
            html: PLACEHOLDER_HTML.to_string(),
        }
    }

    pub fn html(html: String) -> Self {
        Self {
            kind: OutputKind::Html,
            html,
        }
    }

    /// Inline, visibly marked error block. `message` is escaped here, every
    /// markup-significant character included.
    pub fn error(message: &str) -> Self {
        Self {
            kind: OutputKind::Error,
            html: format!(
                "<p class=\"markdown-error\"><strong>Markdown Error:</strong> {}</p>",
                ammonia::clean_text(message)
            ),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == OutputKind::Error
    }
}
