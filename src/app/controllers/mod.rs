//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the display surface:
//! - Preview rendering
//! - View mode state
//! - Document stats

pub mod render;
pub mod stats;
pub mod view_state;
