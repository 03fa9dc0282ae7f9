use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Highlights fenced code blocks by their declared language.
///
/// Output is class-based `<span>` markup (no inline styles), so it passes the
/// sanitizer with only `class` allowed on `span`.
pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
}

impl CodeHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Language token of a fence info string: "rust,ignore" and "rust title" both give "rust".
    pub fn language_token(info: &str) -> Option<&str> {
        info.split(|c: char| c.is_whitespace() || c == ',')
            .find(|s| !s.is_empty())
    }

    pub fn supports(&self, language: &str) -> bool {
        self.syntax_set.find_syntax_by_token(language).is_some()
    }

    /// Highlight `code` as `language`. None when the language is unknown or
    /// syntect fails; the caller falls back to the raw code text.
    pub fn highlight(&self, code: &str, language: &str) -> Option<String> {
        let syntax = self.syntax_set.find_syntax_by_token(language)?;
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, ClassStyle::Spaced);
        for line in LinesWithEndings::from(code) {
            if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
                tracing::debug!(language, "Highlighting failed, using raw code: {}", e);
                return None;
            }
        }
        Some(generator.finalize())
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_token() {
        assert_eq!(CodeHighlighter::language_token("rust"), Some("rust"));
        assert_eq!(CodeHighlighter::language_token("rust,ignore"), Some("rust"));
        assert_eq!(CodeHighlighter::language_token("  python title=x"), Some("python"));
        assert_eq!(CodeHighlighter::language_token(""), None);
    }

    #[test]
    fn test_known_language_gets_spans() {
        let hl = CodeHighlighter::new();
        assert!(hl.supports("rust"));
        let html = hl.highlight("fn main() {}\n", "rust").unwrap();
        assert!(html.contains("<span class="));
        assert!(html.contains("main"));
        assert!(!html.contains("style="));
    }

    #[test]
    fn test_unknown_language() {
        let hl = CodeHighlighter::new();
        assert!(!hl.supports("no-such-language"));
        assert!(hl.highlight("whatever", "no-such-language").is_none());
    }

    #[test]
    fn test_code_is_escaped() {
        let hl = CodeHighlighter::new();
        let html = hl.highlight("let x = a < b && c;\n", "rust").unwrap();
        assert!(html.contains("&lt;"));
        assert!(!html.contains("a < b"));
    }
}
