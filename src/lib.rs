//! MarkPad - a markdown editor with a live, sanitized preview.
//!
//! The editing core in [`app`] is host-agnostic: it writes to a [`app::Surface`]
//! and is driven by explicit timestamps. The FLTK front-end lives in `ui`
//! behind the `gui` feature.

pub mod app;

#[cfg(feature = "gui")]
pub mod ui;
