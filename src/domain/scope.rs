//! Scope value object
//!
//! The scope is the currently active sub-directory of the signal store.
//! Commands resolve against the scope first and fall back through its
//! ancestors up to the store root.

use std::path::{Path, PathBuf};

/// Current position inside the signal store namespace.
///
/// Holds only path arithmetic; nothing here touches the filesystem. A stale
/// scope (directory no longer on disk) is harmless: the chain still lists
/// every ancestor, and lookups simply miss at levels that do not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    root: PathBuf,
    dir: PathBuf,
}

impl Scope {
    /// Create a scope positioned at the store root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let dir = root.clone();
        Self { root, dir }
    }

    /// The store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The current scope directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The scope as segments relative to the root; empty at the root.
    pub fn segments(&self) -> Vec<String> {
        match self.dir.strip_prefix(&self.root) {
            Ok(rel) => rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Reposition the scope at `root/segments`, or the root when empty.
    ///
    /// Existence is not validated; the persisted scope from a previous run
    /// is trusted as-is.
    pub fn set_segments(&mut self, segments: &[String]) {
        self.dir = if segments.is_empty() {
            self.root.clone()
        } else {
            let mut dir = self.root.clone();
            dir.extend(segments);
            dir
        };
    }

    /// Descend into a matched sub-directory.
    pub fn enter(&mut self, dir: PathBuf) {
        self.dir = dir;
    }

    /// Directories searched when resolving a command: the current scope,
    /// then each ancestor, ending with the store root.
    pub fn chain(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        for dir in self.dir.ancestors() {
            dirs.push(dir.to_path_buf());
            if dir == self.root {
                return dirs;
            }
        }
        // Scope not under the root at all; fall back to the root alone.
        vec![self.root.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_scope_is_empty() {
        let scope = Scope::new("/data/irkit");
        assert!(scope.segments().is_empty());
        assert_eq!(scope.dir(), Path::new("/data/irkit"));
    }

    #[test]
    fn fresh_scope_chain_is_root_only() {
        let scope = Scope::new("/data/irkit");
        assert_eq!(scope.chain(), vec![PathBuf::from("/data/irkit")]);
    }

    #[test]
    fn set_segments_positions_under_root() {
        let mut scope = Scope::new("/data/irkit");
        scope.set_segments(&["a".to_string(), "b".to_string()]);
        assert_eq!(scope.dir(), Path::new("/data/irkit/a/b"));
        assert_eq!(scope.segments(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn set_empty_segments_returns_to_root() {
        let mut scope = Scope::new("/data/irkit");
        scope.set_segments(&["a".to_string()]);
        scope.set_segments(&[]);
        assert!(scope.segments().is_empty());
        assert_eq!(scope.dir(), Path::new("/data/irkit"));
    }

    #[test]
    fn chain_walks_from_scope_to_root() {
        let mut scope = Scope::new("/data/irkit");
        scope.set_segments(&["a".to_string(), "b".to_string()]);
        assert_eq!(
            scope.chain(),
            vec![
                PathBuf::from("/data/irkit/a/b"),
                PathBuf::from("/data/irkit/a"),
                PathBuf::from("/data/irkit"),
            ]
        );
    }

    #[test]
    fn enter_descends() {
        let mut scope = Scope::new("/data/irkit");
        scope.enter(PathBuf::from("/data/irkit/tv"));
        assert_eq!(scope.segments(), vec!["tv".to_string()]);
    }

    #[test]
    fn foreign_dir_falls_back_to_root() {
        let mut scope = Scope::new("/data/irkit");
        scope.enter(PathBuf::from("/somewhere/else"));
        assert!(scope.segments().is_empty());
        assert_eq!(scope.chain(), vec![PathBuf::from("/data/irkit")]);
    }
}
