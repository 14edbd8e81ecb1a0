//! Configuration modules.

pub mod api;
pub mod logging;
pub mod portfolio;
pub mod scoring;
pub mod settings;
