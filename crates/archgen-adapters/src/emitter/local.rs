//! Local filesystem emitter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use archgen_core::{application::ports::ArtifactEmitter, error::ArchResult};

/// Production emitter writing generated text with `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalEmitter;

impl LocalEmitter {
    /// Create a new local emitter.
    pub fn new() -> Self {
        Self
    }

    /// Remove a previously generated tree, deepest entries first.
    /// A missing root is not an error.
    pub fn clean(&self, root: &Path) -> ArchResult<()> {
        if !root.exists() {
            return Ok(());
        }
        debug!(root = %root.display(), "cleaning up");

        for entry in WalkDir::new(root).contents_first(true) {
            let entry = entry.map_err(|e| {
                map_io_error(root, io::Error::other(e), "walk generated tree")
            })?;
            debug!(path = %entry.path().display(), "deleting");
            if entry.file_type().is_dir() {
                std::fs::remove_dir(entry.path())
                    .map_err(|e| map_io_error(entry.path(), e, "remove directory"))?;
            } else {
                std::fs::remove_file(entry.path())
                    .map_err(|e| map_io_error(entry.path(), e, "remove file"))?;
            }
        }
        Ok(())
    }
}

impl Default for LocalEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactEmitter for LocalEmitter {
    fn emit(&self, path: &Path, text: &str) -> ArchResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(parent, e, "create directory"))?;
            }
        }
        std::fs::write(path, text).map_err(|e| map_io_error(path, e, "write file"))?;
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> archgen_core::error::ArchError {
    use archgen_core::application::ApplicationError;

    ApplicationError::EmissionFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/CoolService.java");

        LocalEmitter::new().emit(&path, "interface CoolService {}\n").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "interface CoolService {}\n");
    }

    #[test]
    fn emit_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        let emitter = LocalEmitter::new();

        emitter.emit(&path, "one").unwrap();
        emitter.emit(&path, "two").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn clean_removes_generated_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("rootDir");
        let emitter = LocalEmitter::new();
        emitter.emit(&root.join("src/main/java/X.java"), "x").unwrap();
        emitter.emit(&root.join("build.gradle"), "").unwrap();

        emitter.clean(&root).unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn clean_on_missing_root_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalEmitter::new().clean(&dir.path().join("nothing")).is_ok());
    }
}
