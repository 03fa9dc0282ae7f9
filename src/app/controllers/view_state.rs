use crate::app::controllers::render::RenderPipeline;
use crate::app::domain::view_mode::ViewMode;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::surface::{ElementKey, Surface, SurfaceContext};
use crate::app::services::markdown::MarkdownParser;

/// Owns the active view mode and keeps panes, tabs and the status label in
/// line with it.
pub struct ViewStateController {
    mode: ViewMode,
    /// Whether `mode` has been applied to the surface yet.
    painted: bool,
}

impl ViewStateController {
    pub fn new(initial: ViewMode) -> Self {
        Self {
            mode: initial,
            painted: false,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Whether entering `mode` has to render. Preview and reader always do;
    /// split only when the preview is out of date.
    pub fn needs_render(mode: ViewMode, output_current: bool) -> bool {
        match mode {
            ViewMode::Preview | ViewMode::Reader => true,
            ViewMode::Split => !output_current,
            ViewMode::Editor | ViewMode::Annotation => false,
        }
    }

    /// Switch to `mode`. Re-selecting the active mode does nothing.
    /// Returns whether anything changed.
    pub fn set_mode<S: Surface, P: MarkdownParser>(
        &mut self,
        mode: ViewMode,
        content: &str,
        pipeline: &mut RenderPipeline<P>,
        ctx: &mut SurfaceContext<S>,
    ) -> bool {
        if self.painted && mode == self.mode {
            return false;
        }

        tracing::info!(from = %self.mode, to = %mode, "View mode change");
        if Self::needs_render(mode, pipeline.is_current(content)) {
            pipeline.render_now(content, ctx);
        }

        self.apply_panes(mode, ctx);
        self.update_tabs(mode, ctx);
        self.update_status_label(mode, ctx);
        self.mode = mode;
        self.painted = true;
        true
    }

    /// `set_mode` for mode names coming from the host ("editor", "preview", ...).
    /// Unknown names are rejected, never mapped to a default.
    pub fn set_mode_by_name<S: Surface, P: MarkdownParser>(
        &mut self,
        name: &str,
        content: &str,
        pipeline: &mut RenderPipeline<P>,
        ctx: &mut SurfaceContext<S>,
    ) -> Result<bool> {
        let mode = name.parse::<ViewMode>()?;
        Ok(self.set_mode(mode, content, pipeline, ctx))
    }

    /// Keys `1`-`5` select a mode; anything else is ignored.
    pub fn handle_shortcut<S: Surface, P: MarkdownParser>(
        &mut self,
        key: char,
        content: &str,
        pipeline: &mut RenderPipeline<P>,
        ctx: &mut SurfaceContext<S>,
    ) -> bool {
        match ViewMode::from_shortcut(key) {
            Some(mode) => self.set_mode(mode, content, pipeline, ctx),
            None => false,
        }
    }

    pub fn update_status_label<S: Surface>(&self, mode: ViewMode, ctx: &mut SurfaceContext<S>) {
        let label = mode.status_label();
        ctx.write(ElementKey::StatusLabel, |s, h| s.set_text(h, label.text));
        ctx.write(ElementKey::StatusLabel, |s, h| s.set_accent(h, label.color));
    }

    fn apply_panes<S: Surface>(&self, mode: ViewMode, ctx: &mut SurfaceContext<S>) {
        let layout = mode.layout();
        ctx.write(ElementKey::EditorPane, |s, h| s.set_visible(h, layout.editor));
        ctx.write(ElementKey::PreviewPane, |s, h| s.set_visible(h, layout.preview));
    }

    fn update_tabs<S: Surface>(&self, mode: ViewMode, ctx: &mut SurfaceContext<S>) {
        for tab in ViewMode::all() {
            let active = *tab == mode;
            ctx.write(ElementKey::Tab(*tab), |s, h| s.set_active(h, active));
        }
    }
}

impl Default for ViewStateController {
    fn default() -> Self {
        Self::new(ViewMode::Editor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;
    use crate::app::infrastructure::surface::ElementCache;
    use crate::app::infrastructure::surface::testing::MemorySurface;

    struct Harness {
        view: ViewStateController,
        pipeline: RenderPipeline,
        surface: MemorySurface,
        cache: ElementCache<ElementKey>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                view: ViewStateController::default(),
                pipeline: RenderPipeline::default(),
                surface: MemorySurface::default(),
                cache: ElementCache::new(),
            }
        }

        fn set_mode(&mut self, mode: ViewMode, content: &str) -> bool {
            let mut ctx = SurfaceContext::new(&mut self.surface, &mut self.cache);
            self.view.set_mode(mode, content, &mut self.pipeline, &mut ctx)
        }
    }

    #[test]
    fn test_pane_visibility_for_every_mode() {
        let mut h = Harness::new();
        for mode in ViewMode::all() {
            h.set_mode(*mode, "# doc");
            let editor = h.surface.is_visible(ElementKey::EditorPane);
            let preview = h.surface.is_visible(ElementKey::PreviewPane);
            match mode {
                ViewMode::Editor | ViewMode::Annotation => assert!(editor && !preview),
                ViewMode::Preview | ViewMode::Reader => assert!(!editor && preview),
                ViewMode::Split => assert!(editor && preview),
            }
        }
    }

    #[test]
    fn test_every_transition_allowed() {
        let mut h = Harness::new();
        for from in ViewMode::all() {
            for to in ViewMode::all() {
                h.set_mode(*from, "text");
                h.set_mode(*to, "text");
                assert_eq!(h.view.mode(), *to);
            }
        }
    }

    #[test]
    fn test_preview_and_reader_render_editor_does_not() {
        let mut h = Harness::new();
        h.set_mode(ViewMode::Editor, "# a");
        assert_eq!(h.pipeline.commits(), 0);

        h.set_mode(ViewMode::Preview, "# a");
        assert_eq!(h.pipeline.commits(), 1);
        assert!(h.surface.html[&ElementKey::PreviewOutput].contains("<h1>a</h1>"));

        h.set_mode(ViewMode::Annotation, "# a");
        assert_eq!(h.pipeline.commits(), 1);

        h.set_mode(ViewMode::Reader, "# a");
        assert_eq!(h.pipeline.commits(), 2);
    }

    #[test]
    fn test_split_renders_only_when_stale() {
        let mut h = Harness::new();
        h.set_mode(ViewMode::Preview, "same");
        h.set_mode(ViewMode::Split, "same");
        assert_eq!(h.pipeline.commits(), 1);

        h.set_mode(ViewMode::Editor, "same");
        h.set_mode(ViewMode::Split, "changed");
        assert_eq!(h.pipeline.commits(), 2);
        assert!(h.pipeline.is_current("changed"));
    }

    #[test]
    fn test_reselecting_same_mode_is_idempotent() {
        let mut h = Harness::new();
        assert!(h.set_mode(ViewMode::Preview, "x"));
        let writes = h.surface.html_writes;
        for _ in 0..10 {
            assert!(!h.set_mode(ViewMode::Preview, "x"));
        }
        assert_eq!(h.pipeline.commits(), 1);
        assert_eq!(h.surface.html_writes, writes);
    }

    #[test]
    fn test_first_paint_of_initial_mode() {
        let mut h = Harness::new();
        // Initial mode is editor, but nothing has been painted yet
        assert!(h.set_mode(ViewMode::Editor, ""));
        assert!(h.surface.is_visible(ElementKey::EditorPane));
        assert!(!h.surface.is_visible(ElementKey::PreviewPane));
    }

    #[test]
    fn test_tabs_and_status_label() {
        let mut h = Harness::new();
        h.set_mode(ViewMode::Annotation, "");
        for mode in ViewMode::all() {
            let active = h.surface.active[&ElementKey::Tab(*mode)];
            assert_eq!(active, *mode == ViewMode::Annotation);
        }
        let label = ViewMode::Annotation.status_label();
        assert_eq!(h.surface.text[&ElementKey::StatusLabel], label.text);
        assert_eq!(h.surface.accent[&ElementKey::StatusLabel], label.color);
    }

    #[test]
    fn test_lookups_are_cached() {
        let mut h = Harness::new();
        h.set_mode(ViewMode::Split, "a");
        let after_first = h.surface.queries.get();
        h.set_mode(ViewMode::Editor, "a");
        h.set_mode(ViewMode::Reader, "a");
        h.set_mode(ViewMode::Split, "b");
        assert_eq!(h.surface.queries.get(), after_first);
    }

    #[test]
    fn test_shortcuts() {
        let mut h = Harness::new();
        let mut ctx = SurfaceContext::new(&mut h.surface, &mut h.cache);
        assert!(h.view.handle_shortcut('5', "x", &mut h.pipeline, &mut ctx));
        assert_eq!(h.view.mode(), ViewMode::Reader);
        assert!(!h.view.handle_shortcut('9', "x", &mut h.pipeline, &mut ctx));
        assert_eq!(h.view.mode(), ViewMode::Reader);
    }

    #[test]
    fn test_unknown_mode_name_rejected() {
        let mut h = Harness::new();
        h.set_mode(ViewMode::Split, "x");
        let mut ctx = SurfaceContext::new(&mut h.surface, &mut h.cache);
        let err = h
            .view
            .set_mode_by_name("fullscreen", "x", &mut h.pipeline, &mut ctx)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidMode(_)));
        assert_eq!(h.view.mode(), ViewMode::Split);

        assert!(h.view.set_mode_by_name("reader", "x", &mut h.pipeline, &mut ctx).unwrap());
    }

    #[test]
    fn test_removed_pane_is_skipped() {
        let mut h = Harness::new();
        h.surface.removed.push(ElementKey::PreviewPane);
        assert!(h.set_mode(ViewMode::Preview, "x"));
        assert!(!h.surface.is_visible(ElementKey::EditorPane));
        assert!(!h.surface.visible.contains_key(&ElementKey::PreviewPane));
    }
}
