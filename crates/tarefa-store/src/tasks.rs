//! Task-status document store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use tarefa_core::error::TarefaError;
use tarefa_core::task::{TaskIndex, TaskRecord};

use crate::document;

/// The on-disk shape: user id to three-flag record.
pub type TaskStatusDocument = BTreeMap<String, TaskRecord>;

/// JSON-backed store of per-user task completion flags.
///
/// Every mutation loads the whole document, changes one record, and
/// rewrites the whole document. A read that fails aborts the mutation
/// before anything is written. Mutations are serialized through a single
/// mutex so two interleaved calls cannot lose each other's update.
pub struct TaskStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted record for `user_id`, or the all-false default for a
    /// user the document has never seen. Does not mutate the document.
    pub async fn get_status(&self, user_id: &str) -> Result<TaskRecord, TarefaError> {
        let doc: TaskStatusDocument = document::read(&self.path)?;
        Ok(doc.get(user_id).copied().unwrap_or_default())
    }

    /// Snapshot of every persisted record.
    pub async fn all_statuses(&self) -> Result<TaskStatusDocument, TarefaError> {
        document::read(&self.path)
    }

    /// Set one task flag for `user_id`, default-initializing the record on
    /// first use, and persist the whole document.
    pub async fn set_task(
        &self,
        user_id: &str,
        index: TaskIndex,
        completed: bool,
    ) -> Result<(), TarefaError> {
        let _guard = self.lock.lock().await;
        let mut doc: TaskStatusDocument = document::read(&self.path)?;
        doc.entry(user_id.to_string())
            .or_default()
            .set(index, completed);
        document::write(&self.path, &doc)
    }

    /// Overwrite every given user's record with all-false and persist
    /// once. Records of users not in the iterator are left untouched.
    pub async fn reset_all<'a, I>(&self, user_ids: I) -> Result<(), TarefaError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let _guard = self.lock.lock().await;
        let mut doc: TaskStatusDocument = document::read(&self.path)?;
        for id in user_ids {
            doc.insert(id.to_string(), TaskRecord::default());
        }
        document::write(&self.path, &doc)
    }
}
