//! Specification saving operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use vforge_model::ComponentSpec;

use crate::document::export_spec;
use crate::error::{PersistenceError, Result};

/// Save a specification as pretty JSON.
///
/// Uses atomic write (temp file + rename) so a crash never leaves a
/// half-written document behind.
pub fn save_spec(spec: &ComponentSpec, path: &Path) -> Result<()> {
    let text = export_spec(spec)?;
    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(text.as_bytes())
        .map_err(|e| PersistenceError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(component = %spec.name, "Saved specification to {}", path.display());
    Ok(())
}

/// Save on the blocking thread pool.
pub async fn save_spec_async(spec: ComponentSpec, path: PathBuf) -> Result<()> {
    tokio::task::spawn_blocking(move || save_spec(&spec, &path))
        .await
        .map_err(|source| PersistenceError::Task { source })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vforge_model::templates;

    #[test]
    fn save_creates_parent_and_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("button.json");

        save_spec(&templates::button(), &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"name\": \"Button\""));
    }
}
