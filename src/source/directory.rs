//! Exported document tree on disk
//!
//! Layout mirrors the store's collection paths:
//! `<root>/users/<uid>/<collection>/**/*.{json,jsonl}`.

use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::{Collection, RecordStore};
use crate::error::AppError;

pub(crate) struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn users_dir(&self) -> PathBuf {
        self.root.join("users")
    }

    fn find_files(&self, user: &str, collection: Collection) -> Vec<PathBuf> {
        let base = self.users_dir().join(user).join(collection.dir_name());
        let escaped = glob::Pattern::escape(&base.to_string_lossy());

        let mut files = Vec::new();
        for ext in ["json", "jsonl"] {
            match glob::glob(&format!("{escaped}/**/*.{ext}")) {
                Ok(entries) => files.extend(entries.flatten()),
                Err(err) => tracing::warn!(%err, "invalid glob pattern for {}", base.display()),
            }
        }
        files.sort();
        files
    }
}

impl RecordStore for DirectoryStore {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn users(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.users_dir()) else {
            return Vec::new();
        };
        let mut users: Vec<String> = entries
            .flatten()
            .filter(|e| e.file_type().is_ok_and(|t| t.is_dir()))
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();
        users.sort();
        users
    }

    fn list(&self, user: Option<&str>, collection: Collection) -> Result<Vec<Value>, AppError> {
        let Some(user) = user else {
            return Ok(Vec::new());
        };

        let discovery_start = Instant::now();
        let files = self.find_files(user, collection);
        tracing::info!(
            files = files.len(),
            user,
            collection = collection.dir_name(),
            "scanned {:.2}ms",
            discovery_start.elapsed().as_secs_f64() * 1000.0
        );

        // par_iter + collect keeps file order
        let per_file: Vec<Vec<Value>> = files.par_iter().map(|p| parse_file(p)).collect();
        Ok(per_file.into_iter().flatten().collect())
    }
}

fn parse_file(path: &Path) -> Vec<Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(%err, "failed to read {}", path.display());
            return Vec::new();
        }
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some("jsonl") => parse_lines(path, &content),
        _ => parse_document(path, &content),
    }
}

/// A `.json` file holds either an array of documents or one document
fn parse_document(path: &Path, content: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(items)) => items,
        Ok(doc @ Value::Object(_)) => vec![doc],
        Ok(_) => {
            tracing::warn!("skipping {}: not a document or document list", path.display());
            Vec::new()
        }
        Err(err) => {
            tracing::warn!(%err, "invalid JSON in {}", path.display());
            Vec::new()
        }
    }
}

fn parse_lines(path: &Path, content: &str) -> Vec<Value> {
    let mut docs = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(doc) => docs.push(doc),
            Err(err) => {
                tracing::debug!(%err, "invalid JSON at {}:{}", path.display(), line_no + 1);
            }
        }
    }
    docs
}
