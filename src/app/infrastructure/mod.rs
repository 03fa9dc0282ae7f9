//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with the outside world:
//! - The display surface abstraction and its element cache
//! - Logging setup
//! - Error types

pub mod error;
pub mod logging;
pub mod surface;
