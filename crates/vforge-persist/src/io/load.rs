//! Specification loading operations.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use vforge_model::ComponentSpec;

use crate::document::parse_spec;
use crate::error::{PersistenceError, Result};

/// Load a specification. A missing file is `Ok(None)`, not an error.
///
/// The document is parsed but not validated; use
/// [`import_spec`](crate::import_spec) for untrusted input.
pub fn load_spec(path: &Path) -> Result<Option<ComponentSpec>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No specification at {}", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    parse_spec(&text).map(Some)
}

/// Load on the blocking thread pool.
pub async fn load_spec_async(path: PathBuf) -> Result<Option<ComponentSpec>> {
    tokio::task::spawn_blocking(move || load_spec(&path))
        .await
        .map_err(|source| PersistenceError::Task { source })?
}
