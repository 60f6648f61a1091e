//! CLI library components for the checkup processor.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
