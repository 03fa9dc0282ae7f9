use std::time::{Duration, Instant};

use super::controllers::render::RenderPipeline;
use super::controllers::stats::StatsController;
use super::controllers::view_state::ViewStateController;
use super::domain::document::EditorDocument;
use super::domain::messages::Message;
use super::domain::rendered::RenderedOutput;
use super::domain::settings::AppSettings;
use super::domain::stats::Stats;
use super::domain::view_mode::ViewMode;
use super::infrastructure::error::Result;
use super::infrastructure::surface::{ElementCache, Surface, SurfaceContext};
use super::services::markdown::{CmarkParser, MarkdownParser};

/// One editing session: the document, the controllers and the surface they
/// write to. Hosts own this and pass it around explicitly; nothing is global.
pub struct EditorSession<S: Surface, P: MarkdownParser = CmarkParser> {
    surface: S,
    cache: ElementCache<S::Handle>,
    document: EditorDocument,
    render: RenderPipeline<P>,
    view: ViewStateController,
    stats: StatsController,
    settings: AppSettings,
}

impl<S: Surface> EditorSession<S, CmarkParser> {
    pub fn new(surface: S, settings: AppSettings) -> Self {
        let parser = CmarkParser::new(settings.highlight_code_blocks);
        Self::with_parser(surface, parser, settings)
    }
}

impl<S: Surface, P: MarkdownParser> EditorSession<S, P> {
    pub fn with_parser(surface: S, parser: P, settings: AppSettings) -> Self {
        Self {
            surface,
            cache: ElementCache::new(),
            document: EditorDocument::default(),
            render: RenderPipeline::new(parser, settings.render_debounce()),
            view: ViewStateController::new(settings.initial_mode),
            stats: StatsController::new(settings.stats_debounce()),
            settings,
        }
    }

    /// First paint: apply the initial mode and fill the stats bar.
    pub fn start(&mut self) {
        let mut ctx = SurfaceContext::new(&mut self.surface, &mut self.cache);
        let mode = self.view.mode();
        self.view
            .set_mode(mode, self.document.content(), &mut self.render, &mut ctx);
        self.stats.refresh(self.document.content(), &mut ctx);
    }

    /// Handle one host message. Returns false once the session should end.
    pub fn dispatch(&mut self, message: Message, now: Instant) -> bool {
        match message {
            Message::ContentChanged(text) => self.edit(text, now),
            Message::LoadDocument(text) => self.load_document(text),
            Message::SelectMode(mode) => {
                self.select_mode(mode);
            }
            Message::Shortcut(key) => {
                self.shortcut(key);
            }
            Message::Tick => {
                self.poll(now);
            }
            Message::Quit => return false,
        }
        true
    }

    /// Keystroke path: store the text, debounce the preview (when visible) and
    /// the stats.
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        if !self.document.set_content(text) {
            return;
        }
        tracing::debug!(revision = self.document.revision(), "Content changed");
        if self.view.mode().shows_preview() {
            self.render.schedule_render(self.document.content(), now);
        } else {
            // Nothing visible to update; entering a preview mode renders fresh
            self.render.cancel();
        }
        self.stats.schedule(now);
    }

    /// Entry point for externally loaded text (file open, drop, paste):
    /// replace the document and render right away.
    pub fn load_document(&mut self, text: impl Into<String>) {
        self.document.set_content(text);
        tracing::info!(bytes = self.document.content().len(), "Document loaded");
        let mut ctx = SurfaceContext::new(&mut self.surface, &mut self.cache);
        self.render.render_now(self.document.content(), &mut ctx);
        self.stats.refresh(self.document.content(), &mut ctx);
    }

    pub fn select_mode(&mut self, mode: ViewMode) -> bool {
        let mut ctx = SurfaceContext::new(&mut self.surface, &mut self.cache);
        self.view
            .set_mode(mode, self.document.content(), &mut self.render, &mut ctx)
    }

    pub fn select_mode_by_name(&mut self, name: &str) -> Result<bool> {
        let mut ctx = SurfaceContext::new(&mut self.surface, &mut self.cache);
        self.view
            .set_mode_by_name(name, self.document.content(), &mut self.render, &mut ctx)
    }

    pub fn shortcut(&mut self, key: char) -> bool {
        let mut ctx = SurfaceContext::new(&mut self.surface, &mut self.cache);
        self.view
            .handle_shortcut(key, self.document.content(), &mut self.render, &mut ctx)
    }

    /// Run every debounce whose window has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) {
        let mut ctx = SurfaceContext::new(&mut self.surface, &mut self.cache);
        self.render.poll(now, &mut ctx);
        self.stats.poll(now, self.document.content(), &mut ctx);
    }

    /// Earliest instant at which `poll` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.render.next_deadline(), self.stats.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// How long the host may sleep before `poll` has work; `None` when idle.
    pub fn wake_after(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Read-only view of the current text (autosave and friends read this).
    pub fn content(&self) -> &str {
        self.document.content()
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn stats(&self) -> Stats {
        self.stats.stats()
    }

    pub fn rendered(&self) -> Option<&RenderedOutput> {
        self.render.last_output()
    }

    /// Render `content` without touching the surface or the session state.
    pub fn render_preview(&self, content: &str) -> RenderedOutput {
        self.render.render(content)
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Forget every cached element handle, e.g. after the host rebuilt its widgets.
    pub fn invalidate_elements(&mut self) {
        self.cache.clear();
    }
}
