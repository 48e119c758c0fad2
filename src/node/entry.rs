use std::path::PathBuf;

use derive_more::{Deref, Display};

use crate::{
    host,
    node::{Directory, File, PathNode},
};

/// Category of a path as observed when it was listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EntryKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
    /// Neither a directory nor a regular file, e.g. a dangling link or a path
    /// that vanished while being listed.
    #[display("other")]
    Other,
}

impl EntryKind {
    fn of(path: &std::path::Path) -> Self {
        if host::is_dir(path) {
            EntryKind::Directory
        } else if host::is_file(path) {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One result of a directory enumeration: a path and the category it had at
/// listing time. Entries cannot be deleted; convert them to a typed node first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display)]
#[display("{node}")]
pub struct Entry {
    #[deref]
    node: PathNode,
    kind: EntryKind,
}

impl Entry {
    pub(crate) fn classify(path: PathBuf) -> Self {
        let kind = EntryKind::of(&path);
        Self {
            node: PathNode::new(path),
            kind,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn node(&self) -> &PathNode {
        &self.node
    }

    pub fn into_node(self) -> PathNode {
        self.node
    }

    pub fn into_directory(self) -> Option<Directory> {
        (self.kind == EntryKind::Directory).then(|| self.node.cast())
    }

    pub fn into_file(self) -> Option<File> {
        (self.kind == EntryKind::File).then(|| self.node.cast())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn classify_records_category_at_listing_time() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("f.txt");
        fs::write(&file_path, "x").expect("Failed to write file");

        let entry = Entry::classify(file_path.clone());
        fs::remove_file(&file_path).expect("Failed to remove file");

        assert_eq!(entry.kind(), EntryKind::File);
        assert!(!entry.is_file());
    }

    #[test]
    fn conversion_respects_category() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir_entry = Entry::classify(temp_dir.path().to_path_buf());
        let missing_entry = Entry::classify(temp_dir.path().join("missing"));

        assert_eq!(missing_entry.kind(), EntryKind::Other);
        assert!(dir_entry.clone().into_file().is_none());
        assert_eq!(
            dir_entry.into_directory().map(|d| d.path().to_path_buf()),
            Some(temp_dir.path().to_path_buf())
        );
        assert!(missing_entry.clone().into_directory().is_none());
        assert!(missing_entry.into_file().is_none());
    }
}
