//! Collaborator failure types.

use thiserror::Error;
use vforge_core::FontRef;

/// Failure reported by an [`ArtifactBuilder`](crate::ArtifactBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Non-fatal during expansion: text falls back to the host default font.
    #[error("Failed to load font {font}: {reason}")]
    FontLoad { font: FontRef, reason: String },

    #[error("Failed to create node for element '{element}': {reason}")]
    CreateNode { element: String, reason: String },

    #[error("Failed to set property '{property}': {reason}")]
    Property { property: String, reason: String },

    #[error("Host operation '{operation}' failed: {reason}")]
    Host {
        operation: &'static str,
        reason: String,
    },
}

impl BuildError {
    pub fn host(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Host {
            operation,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
