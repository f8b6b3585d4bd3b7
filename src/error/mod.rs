//! Error types for the toolbelt core collections.

use thiserror::Error;

/// Errors raised at the dynamic boundary of the collection types.
///
/// The statically typed surface (`get`, `set`, `merge`, `update`) never
/// fails; errors only appear when converting a loose [`Value`] into a
/// [`Hash`] or when JSON serialization rejects a value.
///
/// [`Value`]: crate::value::Value
/// [`Hash`]: crate::hash::Hash
#[derive(Debug, Error)]
pub enum ToolbeltError {
    #[error("expected a Hash, got {found}")]
    NotAHash { found: &'static str },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolbeltError {
    pub fn not_a_hash(found: &'static str) -> Self {
        Self::NotAHash { found }
    }
}
