//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! scoring logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation

pub mod config;
