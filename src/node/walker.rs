use clap::ValueEnum;
use derive_more::Display;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::node::{Directory, Entry, EntryKind, File, PathNode};

/// Order of siblings within one directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, ValueEnum)]
pub enum EntryOrder {
    /// Whatever order the platform lists entries in.
    #[default]
    #[display("native")]
    Native,
    /// Lexicographic by file name, applied at every level.
    #[display("name")]
    Name,
}

/// Enumerates the contents of a directory, either its immediate children or
/// its whole subtree in depth-first pre-order.
///
/// Every projection re-walks the filesystem; nothing is cached between calls.
/// Symbolic links to directories are descended; a link back to one of its own
/// ancestors is skipped.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathNode,
    recursive: bool,
    order: EntryOrder,
}

impl Walker {
    pub fn top_level(root: &Directory) -> Self {
        Self {
            root: root.node().clone(),
            recursive: false,
            order: EntryOrder::default(),
        }
    }

    pub fn recursive(root: &Directory) -> Self {
        Self {
            recursive: true,
            ..Self::top_level(root)
        }
    }

    pub fn order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn entries(&self) -> Vec<Entry> {
        let mut walk = WalkDir::new(self.root.path())
            .min_depth(1)
            .follow_links(true);
        if !self.recursive {
            walk = walk.max_depth(1);
        }
        if self.order == EntryOrder::Name {
            walk = walk.sort_by_file_name();
        }

        let entries: Vec<Entry> = walk
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    trace!("Visiting {} at depth {}", entry.path().display(), entry.depth());
                    Some(Entry::classify(entry.into_path()))
                }
                Err(err) => unwalkable_entry(err),
            })
            .collect();
        debug!(
            "Enumerated {} entries under {} (recursive: {}, order: {})",
            entries.len(),
            self.root,
            self.recursive,
            self.order
        );
        entries
    }

    pub fn entries_matching(&self, mut predicate: impl FnMut(&Entry) -> bool) -> Vec<Entry> {
        self.entries()
            .into_iter()
            .filter(|entry| predicate(entry))
            .collect()
    }

    pub fn directories(&self) -> Vec<Directory> {
        self.directories_matching(|_| true)
    }

    pub fn directories_matching(
        &self,
        mut predicate: impl FnMut(&Directory) -> bool,
    ) -> Vec<Directory> {
        self.entries()
            .into_iter()
            .filter_map(Entry::into_directory)
            .filter(|directory| predicate(directory))
            .collect()
    }

    pub fn files(&self) -> Vec<File> {
        self.files_matching(|_| true)
    }

    pub fn files_matching(&self, mut predicate: impl FnMut(&File) -> bool) -> Vec<File> {
        self.entries()
            .into_iter()
            .filter_map(Entry::into_file)
            .filter(|file| predicate(file))
            .collect()
    }
}

/// Keeps paths that were listed but cannot be followed (dangling links, entries
/// that vanished mid-walk) as [`EntryKind::Other`]. Unreadable roots, the
/// contents of unreadable subdirectories and link cycles are dropped.
fn unwalkable_entry(err: walkdir::Error) -> Option<Entry> {
    let entry = err
        .path()
        .filter(|_| err.depth() > 0 && err.loop_ancestor().is_none())
        .map(|path| Entry::classify(path.to_path_buf()))
        .filter(|entry| entry.kind() == EntryKind::Other);
    if entry.is_none() {
        debug!("Skipping unwalkable path: {}", err);
    }
    entry
}
