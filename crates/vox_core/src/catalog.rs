//! TOML catalog loading.
//!
//! The catalog file is the sole configuration surface: an ordered
//! `[[command]]` array mirroring [`CommandSpec`]. Anything not present
//! falls back to the built-in catalog at the call site.
//!
//! ```toml
//! [[command]]
//! trigger = "click"
//! description = "Click on any element containing the specified text"
//! example = "click submit button"
//! action = "click"
//! extractor = { kind = "remainder" }
//! ```

use crate::error::VoxError;
use crate::registry::{CommandSpec, Registry};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "command")]
    commands: Vec<CommandSpec>,
}

/// Load and validate a catalog file into a [`Registry`].
pub fn load_catalog(path: &Path) -> Result<Registry, VoxError> {
    let contents = fs::read_to_string(path).map_err(|source| VoxError::CatalogRead {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&contents).map_err(|err| match err {
        VoxError::CatalogParse { source, .. } => VoxError::CatalogParse {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Parse catalog TOML into a validated [`Registry`].
pub fn parse_catalog(contents: &str) -> Result<Registry, VoxError> {
    let file: CatalogFile =
        toml::from_str(contents).map_err(|source| VoxError::CatalogParse {
            path: String::new(),
            source,
        })?;
    Registry::new(file.commands)
}

/// Render a registry back to catalog TOML (used by `voxctl commands
/// --toml` and round-trip tests).
pub fn render_catalog(registry: &Registry) -> String {
    #[derive(serde::Serialize)]
    struct CatalogOut<'a> {
        command: &'a [CommandSpec],
    }
    // Registry contents always serialize; a failure here would mean the
    // catalog types themselves are broken.
    toml::to_string_pretty(&CatalogOut {
        command: registry.commands(),
    })
    .unwrap_or_default()
}
