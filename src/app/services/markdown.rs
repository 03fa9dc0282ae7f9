use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};

use super::highlight::CodeHighlighter;
use crate::app::infrastructure::error::RenderError;

/// Markdown → HTML transform used by the render pipeline.
///
/// Implementations may fail; the pipeline turns failures into an inline error
/// instead of propagating them.
pub trait MarkdownParser {
    fn to_html(&self, markdown: &str) -> Result<String, RenderError>;
}

/// pulldown-cmark with GFM extensions, hard line breaks and no heading ids.
/// Fenced code blocks with a known language go through the highlighter;
/// everything else is left to pulldown-cmark's HTML writer.
pub struct CmarkParser {
    highlighter: Option<CodeHighlighter>,
}

impl CmarkParser {
    pub fn new(highlight_code_blocks: bool) -> Self {
        Self {
            highlighter: highlight_code_blocks.then(CodeHighlighter::new),
        }
    }

    pub fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options
    }

    fn transform_events<'a>(&self, parser: Parser<'a>) -> Vec<Event<'a>> {
        let mut events = Vec::new();
        // (language, collected code) while inside a highlightable fence
        let mut fence: Option<(String, String)> = None;

        for event in parser {
            if let Some((_, code)) = fence.as_mut() {
                match event {
                    Event::Text(text) => code.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => {
                        if let Some((language, code)) = fence.take() {
                            events.push(self.highlighted_block(&language, &code));
                        }
                    }
                    _ => {}
                }
                continue;
            }

            if let Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) = &event {
                if let Some(language) = self.fence_language(info) {
                    fence = Some((language, String::new()));
                    continue;
                }
            }

            match event {
                // Single newlines in a paragraph become <br />
                Event::SoftBreak => events.push(Event::HardBreak),
                other => events.push(other),
            }
        }
        events
    }

    fn fence_language(&self, info: &str) -> Option<String> {
        let highlighter = self.highlighter.as_ref()?;
        let language = CodeHighlighter::language_token(info)?;
        highlighter
            .supports(language)
            .then(|| language.to_string())
    }

    fn highlighted_block(&self, language: &str, code: &str) -> Event<'static> {
        let body = self
            .highlighter
            .as_ref()
            .and_then(|hl| hl.highlight(code, language));
        let body = body.unwrap_or_else(|| ammonia::clean_text(code));
        Event::Html(CowStr::from(format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            language, body
        )))
    }
}

impl Default for CmarkParser {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MarkdownParser for CmarkParser {
    fn to_html(&self, markdown: &str) -> Result<String, RenderError> {
        let parser = Parser::new_ext(markdown, Self::options());
        let events = self.transform_events(parser);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());
        Ok(html_output)
    }
}
