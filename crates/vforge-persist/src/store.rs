//! File-backed [`Persistence`] collaborator.

use std::path::{Path, PathBuf};

use vforge_expand::Persistence;
use vforge_model::ComponentSpec;

use crate::error::PersistenceError;
use crate::io::{load_spec_async, save_spec_async};

/// One specification stored as a JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFileStore {
    type Error = PersistenceError;

    async fn load(&self) -> Result<Option<ComponentSpec>, PersistenceError> {
        load_spec_async(self.path.clone()).await
    }

    async fn save(&self, spec: &ComponentSpec) -> Result<(), PersistenceError> {
        save_spec_async(spec.clone(), self.path.clone()).await
    }
}
