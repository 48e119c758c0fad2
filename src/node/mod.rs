//! Typed views over filesystem paths.
//!
//! [`PathNode`] is the generic handle. [`Directory`] and [`File`] declare a
//! role over the same path, and [`PathNode::cast`] moves between them.
//! Enumerating a directory yields [`Entry`] records carrying the category seen
//! at listing time.

mod cast;
mod directory;
mod entry;
mod file;
mod path_node;
mod walker;

pub use cast::{DirectoryRole, FileRole, FromNode};
pub use directory::Directory;
pub use entry::{Entry, EntryKind};
pub use file::File;
pub use path_node::PathNode;
pub use walker::{EntryOrder, Walker};
