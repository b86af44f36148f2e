//! Record store abstraction
//!
//! The document store owns persistence. This layer only reads what it
//! exported, one collection per user, and hands raw documents to the core.

pub(crate) mod directory;
pub(crate) mod loader;
pub(crate) mod snapshot;

use serde_json::Value;

use crate::error::AppError;

/// Per-user collections the analytics read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Collection {
    MoodCheckins,
    Tasks,
}

impl Collection {
    /// Directory name in the exported document tree
    pub(crate) fn dir_name(self) -> &'static str {
        match self {
            Collection::MoodCheckins => "moodCheckins",
            Collection::Tasks => "tasks",
        }
    }

    pub(crate) fn display_name(self) -> &'static str {
        match self {
            Collection::MoodCheckins => "check-in",
            Collection::Tasks => "task",
        }
    }
}

/// Read access to exported documents
pub(crate) trait RecordStore: Send + Sync {
    /// Short name for log output
    fn name(&self) -> &'static str;

    /// Users with data in this store
    fn users(&self) -> Vec<String> {
        Vec::new()
    }

    /// Every document of `collection` for `user`, in a stable order
    fn list(&self, user: Option<&str>, collection: Collection) -> Result<Vec<Value>, AppError>;
}

pub(crate) use directory::DirectoryStore;
pub(crate) use loader::{LoadResult, load_check_ins, load_tasks, resolve_user};
pub(crate) use snapshot::SnapshotFile;
