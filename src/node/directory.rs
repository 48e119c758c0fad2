use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use derive_more::{Deref, Display, From};
use tracing::debug;

use crate::{
    host,
    node::{DirectoryRole, Entry, File, FileRole, FromNode, PathNode, Walker},
};

/// A path in the directory role.
///
/// The role is a declaration, not a check: the path may not exist or may
/// currently be something else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, From)]
pub struct Directory {
    node: PathNode,
}

impl Directory {
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

    /// `child` may span several levels (`"a/b/c"`). No I/O.
    pub fn child_directory(&self, child: impl AsRef<Path>) -> Directory {
        Directory::with_child(self, child)
    }

    pub fn child_directory_as<D: DirectoryRole>(&self, child: impl AsRef<Path>) -> D {
        D::from_node(self.node.join(child))
    }

    pub fn child_file(&self, child: impl AsRef<Path>) -> File {
        File::with_child(self, child)
    }

    pub fn child_file_as<F: FileRole>(&self, child: impl AsRef<Path>) -> F {
        F::from_node(self.node.join(child))
    }

    /// Creates the directory and any missing ancestors. Failures are logged
    /// and otherwise ignored.
    pub fn create(&self) -> &Self {
        if let Err(err) = host::create_dir_all(self.path()) {
            debug!("Ignoring failure to create {}: {}", self, err);
        }
        self
    }

    /// Removes the directory and everything below it. A missing directory is
    /// left alone; other failures are logged and otherwise ignored.
    pub fn delete(&self) -> &Self {
        match host::remove_dir_all(self.path()) {
            Err(err) if err.kind() != ErrorKind::NotFound => {
                debug!("Ignoring failure to delete {}: {}", self, err);
            }
            _ => {}
        }
        self
    }

    pub fn walk(&self) -> Walker {
        Walker::top_level(self)
    }

    pub fn walk_recursive(&self) -> Walker {
        Walker::recursive(self)
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.walk().entries()
    }

    pub fn entries_matching(&self, predicate: impl FnMut(&Entry) -> bool) -> Vec<Entry> {
        self.walk().entries_matching(predicate)
    }

    pub fn directories(&self) -> Vec<Directory> {
        self.walk().directories()
    }

    pub fn directories_matching(&self, predicate: impl FnMut(&Directory) -> bool) -> Vec<Directory> {
        self.walk().directories_matching(predicate)
    }

    pub fn files(&self) -> Vec<File> {
        self.walk().files()
    }

    pub fn files_matching(&self, predicate: impl FnMut(&File) -> bool) -> Vec<File> {
        self.walk().files_matching(predicate)
    }

    pub fn entries_recursive(&self) -> Vec<Entry> {
        self.walk_recursive().entries()
    }

    pub fn entries_recursive_matching(&self, predicate: impl FnMut(&Entry) -> bool) -> Vec<Entry> {
        self.walk_recursive().entries_matching(predicate)
    }

    pub fn directories_recursive(&self) -> Vec<Directory> {
        self.walk_recursive().directories()
    }

    pub fn directories_recursive_matching(
        &self,
        predicate: impl FnMut(&Directory) -> bool,
    ) -> Vec<Directory> {
        self.walk_recursive().directories_matching(predicate)
    }

    pub fn files_recursive(&self) -> Vec<File> {
        self.walk_recursive().files()
    }

    pub fn files_recursive_matching(&self, predicate: impl FnMut(&File) -> bool) -> Vec<File> {
        self.walk_recursive().files_matching(predicate)
    }
}

impl FromNode for Directory {
    fn from_node(node: PathNode) -> Self {
        Self { node }
    }
}

impl DirectoryRole for Directory {}

impl From<Directory> for PathNode {
    fn from(directory: Directory) -> Self {
        directory.node
    }
}

impl AsRef<Path> for Directory {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}
