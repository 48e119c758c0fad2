use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use derive_more::{Deref, Display, From};
use tracing::debug;

use crate::{
    host,
    node::{FileRole, FromNode, PathNode},
};

/// A path in the file role. Like [`Directory`](crate::node::Directory), the
/// role is not checked against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, From)]
pub struct File {
    node: PathNode,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            node: PathNode::new(path),
        }
    }

    pub fn with_child(parent: impl AsRef<Path>, child: impl AsRef<Path>) -> Self {
        Self {
            node: PathNode::with_child(parent, child),
        }
    }

    pub fn node(&self) -> &PathNode {
        &self.node
    }

    pub fn into_node(self) -> PathNode {
        self.node
    }

    /// The name up to its last dot. `archive.tar.gz` gives `archive.tar`,
    /// `.profile` gives an empty string.
    pub fn name_without_extension(&self) -> String {
        let name = self.name();
        match name.rfind('.') {
            Some(dot) => name[..dot].to_string(),
            None => name,
        }
    }

    /// The text after the last dot of the name, or "" when there is no dot or
    /// the name ends with one.
    pub fn extension(&self) -> String {
        let name = self.name();
        match name.rfind('.') {
            Some(dot) => name[dot + 1..].to_string(),
            None => String::new(),
        }
    }

    pub fn create_parent_directory(&self) -> &Self {
        self.parent().create();
        self
    }

    /// Removes this single entry, which may also be an empty directory. A
    /// missing file is left alone; other failures, such as a non-empty
    /// directory, are logged and otherwise ignored.
    pub fn delete(&self) -> &Self {
        let removed = match host::remove_file(self.path()) {
            Err(_) if host::is_dir(self.path()) => host::remove_dir(self.path()),
            removed => removed,
        };
        match removed {
            Err(err) if err.kind() != ErrorKind::NotFound => {
                debug!("Ignoring failure to delete {}: {}", self, err);
            }
            _ => {}
        }
        self
    }
}

impl FromNode for File {
    fn from_node(node: PathNode) -> Self {
        Self { node }
    }
}

impl FileRole for File {}

impl From<File> for PathNode {
    fn from(file: File) -> Self {
        file.node
    }
}

impl AsRef<Path> for File {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case("notes.txt", "notes", "txt")]
    #[case("archive.tar.gz", "archive.tar", "gz")]
    #[case("Makefile", "Makefile", "")]
    #[case("trailing.", "trailing", "")]
    #[case(".profile", "", "profile")]
    #[case("dir.d/plain", "plain", "")]
    fn splits_name_at_last_dot(
        #[case] path: &str,
        #[case] stem: &str,
        #[case] extension: &str,
    ) {
        let file = File::new(path);
        assert_eq!(file.name_without_extension(), stem);
        assert_eq!(file.extension(), extension);
    }

    #[test]
    fn create_parent_directory_makes_missing_ancestors() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = File::new(temp_dir.path().join("a/b/c.txt"));

        file.create_parent_directory();

        assert!(temp_dir.path().join("a/b").is_dir());
        assert!(!file.exists());
    }

    #[test]
    fn delete_removes_file_and_tolerates_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = File::new(temp_dir.path().join("doomed.bin"));
        fs::write(file.path(), [1u8, 2]).expect("Failed to write file");

        file.delete();
        assert!(!file.exists());

        file.delete();
        assert!(!file.exists());
    }

    #[test]
    fn delete_removes_empty_directories_only() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let empty = File::new(temp_dir.path().join("empty"));
        let full = File::new(temp_dir.path().join("full"));
        fs::create_dir_all(full.path().join("inner")).expect("Failed to create dirs");
        fs::create_dir(empty.path()).expect("Failed to create dir");

        empty.delete();
        full.delete();

        assert!(!empty.exists());
        assert!(full.is_directory());
        assert!(full.path().join("inner").is_dir());
    }
}
