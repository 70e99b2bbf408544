//! CLI library components for numconv.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod progress;
pub mod summary;
