//! Single-file snapshot: the full document list as one JSON array.
//! `-` reads the snapshot from stdin.

use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

use super::{Collection, RecordStore};
use crate::core::json_kind;
use crate::error::AppError;

pub(crate) struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<String, AppError> {
        let io_err = |source| AppError::Io {
            path: self.path.clone(),
            source,
        };
        if self.path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
            return Ok(buf);
        }
        std::fs::read_to_string(&self.path).map_err(io_err)
    }
}

impl RecordStore for SnapshotFile {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    /// The file is already one user's collection; `user` and `collection`
    /// are not consulted.
    fn list(&self, _user: Option<&str>, _collection: Collection) -> Result<Vec<Value>, AppError> {
        let content = self.read()?;
        let value: Value = serde_json::from_str(&content).map_err(|source| AppError::Json {
            path: self.path.clone(),
            source,
        })?;
        match value {
            Value::Array(items) => Ok(items),
            other => Err(AppError::NotAnArray {
                found: json_kind(&other),
            }),
        }
    }
}
