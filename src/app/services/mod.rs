//! Services layer - business operations and utilities.
//!
//! This module contains the collaborators the controllers drive:
//! - Markdown parsing
//! - Code block highlighting
//! - HTML sanitizing
//! - Debounce timing

pub mod debounce;
pub mod highlight;
pub mod markdown;
pub mod sanitize;
