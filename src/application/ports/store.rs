//! Signal store port interface

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Signal store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Signal store I/O failed: {0}")]
    Io(String),
}

/// Port for the hierarchical signal namespace.
///
/// Names map to leaf blobs (stored signals) and/or sub-namespaces; both may
/// coexist under the same name, and command resolution honors both.
#[async_trait]
pub trait SignalStore: Send + Sync {
    /// Root directory of the namespace
    fn root(&self) -> PathBuf;

    /// Path of the leaf blob `name` directly under `dir`, if one exists
    fn find_leaf(&self, dir: &Path, name: &str) -> Option<PathBuf>;

    /// Path of the sub-namespace `name` directly under `dir`, if one exists
    fn find_dir(&self, dir: &Path, name: &str) -> Option<PathBuf>;

    /// Read a stored signal blob
    async fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError>;

    /// Store a signal blob as `root/<dir_segments...>/<name>` with the leaf
    /// extension, creating intermediate directories. Overwrites an existing
    /// leaf of the same name.
    async fn write(
        &self,
        dir_segments: &[String],
        name: &str,
        data: &[u8],
    ) -> Result<PathBuf, StoreError>;
}
