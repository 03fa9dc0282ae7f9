//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (document, view modes, stats, settings, messages)
//! - `controllers/` - Orchestration (render pipeline, view state, stats)
//! - `services/` - Collaborators (markdown parser, highlighter, sanitizer, debounce)
//! - `infrastructure/` - External integrations (display surface, logging, errors)
//! - `state.rs` - Editor session coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::render::RenderPipeline;
pub use controllers::stats::StatsController;
pub use controllers::view_state::ViewStateController;
pub use domain::{
    AppSettings, EditorDocument, Message, OutputKind, RenderedOutput, StatField, Stats, ViewMode,
};
pub use infrastructure::error::{AppError, RenderError};
pub use infrastructure::surface::{ElementCache, ElementKey, Surface, SurfaceContext};
pub use services::markdown::{CmarkParser, MarkdownParser};
pub use state::EditorSession;
