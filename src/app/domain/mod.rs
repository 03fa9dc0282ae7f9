//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The edited document and its rendered output
//! - View modes and their pane/label tables
//! - Derived document stats
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod rendered;
pub mod settings;
pub mod stats;
pub mod view_mode;

pub use document::EditorDocument;
pub use messages::Message;
pub use rendered::{OutputKind, RenderedOutput};
pub use settings::AppSettings;
pub use stats::{StatField, Stats};
pub use view_mode::{PaneLayout, StatusLabel, ViewMode};
