//! Shared helpers for the flat JSON documents: read with missing-file
//! defaults, write via atomic replace.

use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

use tarefa_core::error::TarefaError;

/// Read and parse a JSON document. A missing file yields the default
/// (empty) document; unreadable or malformed content is a persistence
/// error.
pub(crate) fn read<T>(path: &Path) -> Result<T, TarefaError>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        TarefaError::Persistence(format!("failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        TarefaError::Persistence(format!("malformed document {}: {e}", path.display()))
    })
}

/// Persist a JSON document atomically: serialize (2-space indented) to a
/// temp file next to the target, then rename over it. A failing write
/// leaves the prior document untouched; a truncated file is never
/// observable.
pub(crate) fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), TarefaError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TarefaError::Persistence(format!(
                    "failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let json = serde_json::to_string_pretty(value)
        .map_err(|e| TarefaError::Persistence(format!("failed to serialize document: {e}")))?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).map_err(|e| {
        TarefaError::Persistence(format!("failed to write {}: {e}", tmp.display()))
    })?;
    std::fs::rename(&tmp, path).map_err(|e| {
        TarefaError::Persistence(format!("failed to replace {}: {e}", path.display()))
    })?;
    tracing::debug!("persisted {}", path.display());
    Ok(())
}
