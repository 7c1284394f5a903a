//! Language-preference document store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

use tarefa_core::error::TarefaError;
use tarefa_core::lang::LanguageCode;

use crate::document;

/// On-disk shape: `{"users": {"<id>": "<code>"}}`. Codes are kept as
/// strings on disk so one hand-edited entry cannot poison the rest of
/// the document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LanguageDocument {
    #[serde(default)]
    users: BTreeMap<String, String>,
}

/// JSON-backed store of per-user language preferences.
pub struct LanguagePrefs {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LanguagePrefs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// The stored preference for `user_id`, if any. An unreadable or
    /// missing document, or an entry outside the supported set, reads as
    /// "no preference recorded".
    pub fn get(&self, user_id: &str) -> Option<LanguageCode> {
        let doc: LanguageDocument = document::read(&self.path).unwrap_or_default();
        doc.users.get(user_id).and_then(|s| LanguageCode::parse(s))
    }

    /// Record `user_id`'s preference and persist the whole document
    /// immediately (last-writer-wins).
    pub async fn set(&self, user_id: &str, code: LanguageCode) -> Result<(), TarefaError> {
        let _guard = self.lock.lock().await;
        let mut doc: LanguageDocument = document::read(&self.path)?;
        doc.users.insert(user_id.to_string(), code.as_str().to_string());
        document::write(&self.path, &doc)
    }
}
