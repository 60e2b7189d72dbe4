//! In-memory emitter for testing and dry runs.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use archgen_core::{
    application::{ApplicationError, ports::ArtifactEmitter},
    error::ArchResult,
};

/// In-memory emitter. Records written text per path, and how many times
/// each path has been written so tests can assert the engine never
/// writes twice.
#[derive(Debug, Clone)]
pub struct MemoryEmitter {
    inner: Arc<RwLock<HashMap<PathBuf, FileRecord>>>,
}

#[derive(Debug)]
struct FileRecord {
    text: String,
    writes: usize,
}

impl MemoryEmitter {
    /// Create a new empty memory emitter.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Read an emitted file's content (testing helper). The inspection
    /// helpers recover from a poisoned lock; only `emit` surfaces
    /// poisoning as an error.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.get(path).map(|record| record.text.clone())
    }

    /// How many times `path` has been written.
    pub fn write_count(&self, path: &Path) -> usize {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.get(path).map_or(0, |record| record.writes)
    }

    /// List all emitted paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut paths: Vec<PathBuf> = inner.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Number of distinct emitted files.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.clear();
    }
}

impl Default for MemoryEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactEmitter for MemoryEmitter {
    fn emit(&self, path: &Path, text: &str) -> ArchResult<()> {
        let mut inner =
            self.inner
                .write()
                .map_err(|_| ApplicationError::EmissionFailed {
                    path: path.to_path_buf(),
                    reason: "emitter lock poisoned".into(),
                })?;

        inner
            .entry(path.to_path_buf())
            .and_modify(|record| {
                record.text = text.to_string();
                record.writes += 1;
            })
            .or_insert_with(|| FileRecord {
                text: text.to_string(),
                writes: 1,
            });
        Ok(())
    }
}
