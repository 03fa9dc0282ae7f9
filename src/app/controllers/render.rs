use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::app::domain::rendered::RenderedOutput;
use crate::app::infrastructure::error::RenderError;
use crate::app::infrastructure::surface::{ElementKey, Surface, SurfaceContext};
use crate::app::services::debounce::Debouncer;
use crate::app::services::markdown::{CmarkParser, MarkdownParser};
use crate::app::services::sanitize::Sanitizer;

pub const DEFAULT_RENDER_DELAY: Duration = Duration::from_millis(300);

/// Turns document text into sanitized preview HTML, at most once per quiet
/// period of input.
pub struct RenderPipeline<P = CmarkParser> {
    parser: P,
    sanitizer: Sanitizer,
    debounce: Debouncer<String>,
    /// Text the committed output was rendered from.
    rendered_from: Option<String>,
    last_output: Option<RenderedOutput>,
    commits: usize,
}

impl<P: MarkdownParser> RenderPipeline<P> {
    pub fn new(parser: P, delay: Duration) -> Self {
        Self {
            parser,
            sanitizer: Sanitizer::new(),
            debounce: Debouncer::new(delay),
            rendered_from: None,
            last_output: None,
            commits: 0,
        }
    }

    /// Supersede any pending render and start a new quiet window.
    pub fn schedule_render(&mut self, content: &str, now: Instant) {
        tracing::debug!(bytes = content.len(), "Render scheduled");
        self.debounce.queue(content.to_string(), now);
    }

    /// Render and commit the pending content if its window has elapsed.
    pub fn poll<S: Surface>(&mut self, now: Instant, ctx: &mut SurfaceContext<S>) -> bool {
        match self.debounce.take_ready(now) {
            Some(content) => {
                self.render_and_commit(content, ctx);
                true
            }
            None => false,
        }
    }

    /// Render immediately, dropping whatever was pending.
    pub fn render_now<S: Surface>(&mut self, content: &str, ctx: &mut SurfaceContext<S>) {
        self.debounce.cancel();
        self.render_and_commit(content.to_string(), ctx);
    }

    pub fn render(&self, content: &str) -> RenderedOutput {
        if content.trim().is_empty() {
            return RenderedOutput::placeholder();
        }

        match self.parse(content) {
            Ok(html) => RenderedOutput::html(self.sanitizer.clean(&html)),
            Err(e) => {
                tracing::warn!("Markdown render failed: {}", e);
                RenderedOutput::error(&e.to_string())
            }
        }
    }

    fn parse(&self, content: &str) -> Result<String, RenderError> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.parser.to_html(content))) {
            Ok(result) => result,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                Err(RenderError::Panicked(message))
            }
        }
    }

    fn render_and_commit<S: Surface>(&mut self, content: String, ctx: &mut SurfaceContext<S>) {
        let started = Instant::now();
        let output = self.render(&content);
        tracing::debug!(
            elapsed_us = started.elapsed().as_micros() as u64,
            kind = ?output.kind,
            "Rendered preview"
        );

        ctx.write(ElementKey::PreviewOutput, |s, h| s.set_html(h, &output.html));
        self.commits += 1;
        self.rendered_from = Some(content);
        self.last_output = Some(output);
    }

    /// Whether the committed output was rendered from exactly `content`.
    pub fn is_current(&self, content: &str) -> bool {
        self.rendered_from.as_deref() == Some(content)
    }

    pub fn cancel(&mut self) {
        self.debounce.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    pub fn last_output(&self) -> Option<&RenderedOutput> {
        self.last_output.as_ref()
    }

    /// Number of renders committed to the surface so far.
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl Default for RenderPipeline<CmarkParser> {
    fn default() -> Self {
        Self::new(CmarkParser::default(), DEFAULT_RENDER_DELAY)
    }
}
