use crate::error::{DuckfetchError, Result};
use std::path::Path;

/// Idempotent directory creation, including parents. Any failure maps to
/// the destination taxonomy so callers see which path could not be made.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|_| DuckfetchError::Destination {
            path: path.to_path_buf(),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        ensure_dir_exists(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn is_idempotent_for_existing_directories() {
        let dir = tempfile::tempdir().unwrap();

        ensure_dir_exists(dir.path()).unwrap();
        ensure_dir_exists(dir.path()).unwrap();

        assert!(dir.path().is_dir());
    }

    #[test]
    fn maps_creation_failure_to_destination_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file, not a directory").unwrap();

        let target = blocker.join("child");
        let err = ensure_dir_exists(&target).unwrap_err();

        assert!(matches!(err, DuckfetchError::Destination { path } if path == target));
    }
}
