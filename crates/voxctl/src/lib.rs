//! voxctl library - exposes modules for integration tests.

pub mod cli;
pub mod executor;
pub mod output;
pub mod repl;
