use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture: a temporary directory populated with named files.
///
/// The importer never reads file contents (Anki does, given the path), so
/// empty files are enough.
#[allow(dead_code)]
pub struct ImageDir {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl ImageDir {
    pub fn with_files(names: &[&str]) -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        for name in names {
            File::create(temp_dir.path().join(name))
                .with_context(|| format!("Failed to create fixture file {name}"))?;
        }
        Ok(Self {
            path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A path that is guaranteed not to exist.
#[allow(dead_code)]
pub fn missing_dir() -> PathBuf {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("gone");
    drop(temp_dir);
    path
}
