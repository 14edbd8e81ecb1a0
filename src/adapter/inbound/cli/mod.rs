//! CLI module graph.

pub mod analyze;
pub mod command;
pub mod config;
pub mod format;
pub mod output;
pub mod portfolio;
pub mod report;
pub mod verify;
