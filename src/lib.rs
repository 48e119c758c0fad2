//! Typed handles over filesystem paths.
//!
//! A [`PathNode`](node::PathNode) names a path without assuming what it is.
//! [`Directory`](node::Directory) and [`File`](node::File) declare a role over
//! the same path and can be cast into one another freely; directories
//! enumerate their contents either one level deep or recursively. Files become
//! [`ContentFile`](content::ContentFile)s to read and write typed payloads.
//!
//! ```no_run
//! use typedfs::content::TextFile;
//! use typedfs::node::Directory;
//!
//! let project = Directory::new("project");
//! project.child_directory("notes").create();
//!
//! let readme: TextFile = project.child_file_as("notes/README.txt");
//! readme.write_if_not_exists("todo").expect("text is valid UTF-8");
//!
//! for file in project.files_recursive_matching(|f| f.extension() == "txt") {
//!     println!("{file}");
//! }
//! ```

#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod config;
pub mod content;
pub mod ext;
pub mod host;
pub mod node;
