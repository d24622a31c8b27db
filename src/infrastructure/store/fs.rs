//! Filesystem signal store adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{SignalStore, StoreError};

/// Extension carried by every stored signal file
pub const SIGNAL_EXTENSION: &str = "ir";

/// Signal namespace backed by a directory tree.
///
/// A stored signal is a `<name>.ir` file; a sub-namespace is a plain
/// directory. The same name may be both at once.
pub struct FsSignalStore {
    root: PathBuf,
}

impl FsSignalStore {
    /// Create a store rooted at the per-user data directory
    pub fn new() -> Self {
        let root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("irkit");

        Self { root }
    }

    /// Create a store rooted at a custom directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn leaf_file(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.{}", name, SIGNAL_EXTENSION))
    }
}

impl Default for FsSignalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalStore for FsSignalStore {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn find_leaf(&self, dir: &Path, name: &str) -> Option<PathBuf> {
        let path = Self::leaf_file(dir, name);
        path.is_file().then_some(path)
    }

    fn find_dir(&self, dir: &Path, name: &str) -> Option<PathBuf> {
        let path = dir.join(name);
        path.is_dir().then_some(path)
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        fs::read(path)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))
    }

    async fn write(
        &self,
        dir_segments: &[String],
        name: &str,
        data: &[u8],
    ) -> Result<PathBuf, StoreError> {
        let mut dir = self.root.clone();
        dir.extend(dir_segments);

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {}", dir.display(), e)))?;

        let path = Self::leaf_file(&dir, name);
        fs::write(&path, data)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_root_is_under_data_dir() {
        let store = FsSignalStore::new();
        assert!(store.root().to_string_lossy().contains("irkit"));
    }

    #[test]
    fn leaf_file_appends_extension() {
        let path = FsSignalStore::leaf_file(Path::new("/data/irkit/tv"), "power");
        assert_eq!(path, PathBuf::from("/data/irkit/tv/power.ir"));
    }

    #[test]
    fn find_leaf_requires_a_file() {
        let tmp = TempDir::new().unwrap();
        let store = FsSignalStore::with_root(tmp.path());

        assert!(store.find_leaf(tmp.path(), "power").is_none());

        std::fs::write(tmp.path().join("power.ir"), b"sig").unwrap();
        assert_eq!(
            store.find_leaf(tmp.path(), "power"),
            Some(tmp.path().join("power.ir"))
        );

        // A directory named like a leaf file is not a leaf
        std::fs::create_dir(tmp.path().join("fake.ir")).unwrap();
        assert!(store.find_leaf(tmp.path(), "fake").is_none());
    }

    #[test]
    fn find_dir_requires_a_directory() {
        let tmp = TempDir::new().unwrap();
        let store = FsSignalStore::with_root(tmp.path());

        assert!(store.find_dir(tmp.path(), "tv").is_none());

        std::fs::create_dir(tmp.path().join("tv")).unwrap();
        assert_eq!(store.find_dir(tmp.path(), "tv"), Some(tmp.path().join("tv")));
    }

    #[tokio::test]
    async fn write_creates_intermediate_directories() {
        let tmp = TempDir::new().unwrap();
        let store = FsSignalStore::with_root(tmp.path());

        let path = store
            .write(&["living".to_string(), "tv".to_string()], "power", b"sig")
            .await
            .unwrap();

        assert_eq!(path, tmp.path().join("living/tv/power.ir"));
        assert_eq!(std::fs::read(&path).unwrap(), b"sig");
    }

    #[tokio::test]
    async fn write_at_root_without_segments() {
        let tmp = TempDir::new().unwrap();
        let store = FsSignalStore::with_root(tmp.path());

        let path = store.write(&[], "mute", b"sig").await.unwrap();

        assert_eq!(path, tmp.path().join("mute.ir"));
    }

    #[tokio::test]
    async fn write_overwrites_existing_leaf() {
        let tmp = TempDir::new().unwrap();
        let store = FsSignalStore::with_root(tmp.path());

        store.write(&[], "power", b"old").await.unwrap();
        let path = store.write(&[], "power", b"new").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn read_round_trips_bytes() {
        let tmp = TempDir::new().unwrap();
        let store = FsSignalStore::with_root(tmp.path());

        let path = store.write(&[], "power", &[0x00, 0xff, 0x7f]).await.unwrap();
        let data = store.read(&path).await.unwrap();

        assert_eq!(data, vec![0x00, 0xff, 0x7f]);
    }

    #[tokio::test]
    async fn read_missing_leaf_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let store = FsSignalStore::with_root(tmp.path());

        let result = store.read(&tmp.path().join("missing.ir")).await;

        assert!(result.is_err());
    }
}
