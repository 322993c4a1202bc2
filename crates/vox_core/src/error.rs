//! Error types for vox.
//!
//! These cover catalog construction and pattern compilation only.
//! Interpretation itself is total: unmatched input is represented as data
//! on the `Interpretation`, never as an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoxError {
    #[error("duplicate trigger in catalog: '{0}'")]
    DuplicateTrigger(String),

    #[error("catalog contains a command with an empty trigger")]
    EmptyTrigger,

    #[error("catalog contains no commands")]
    EmptyCatalog,

    #[error("failed to read catalog file '{path}': {source}")]
    CatalogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file '{path}': {source}")]
    CatalogParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("pattern compilation failed for trigger '{trigger}': {source}")]
    Pattern {
        trigger: String,
        #[source]
        source: regex::Error,
    },
}
