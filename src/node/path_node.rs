use std::path::{Component, Path, PathBuf};

use derive_more::Display;

use crate::{
    ext::PathExt,
    host,
    node::{Directory, DirectoryRole, File, FromNode},
};

/// A path with no assumed category.
///
/// Construction never touches the filesystem; every query goes to the host at
/// call time. Two nodes over equal paths compare equal and observe the same
/// filesystem state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{}", path.display())]
pub struct PathNode {
    path: PathBuf,
}

impl PathNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Joins `child` onto `parent` using the platform's join rule.
    pub fn with_child(parent: impl AsRef<Path>, child: impl AsRef<Path>) -> Self {
        Self::new(parent.as_ref().join(child))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    pub fn join(&self, child: impl AsRef<Path>) -> PathNode {
        Self::with_child(&self.path, child)
    }

    pub fn exists(&self) -> bool {
        host::exists(&self.path)
    }

    pub fn is_directory(&self) -> bool {
        host::is_dir(&self.path)
    }

    pub fn is_file(&self) -> bool {
        host::is_file(&self.path)
    }

    /// The final segment of the path as written, so `a/.` yields "." and
    /// `a/..` yields "..". A bare root has no name and yields "".
    pub fn name(&self) -> String {
        let raw = self.path.to_string_lossy();
        if raw
            .strip_suffix('.')
            .is_some_and(|head| head.is_empty() || head.ends_with(std::path::is_separator))
        {
            return ".".to_string();
        }
        match self.path.components().next_back() {
            Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
            Some(Component::ParentDir) => "..".to_string(),
            Some(Component::CurDir) => ".".to_string(),
            _ => String::new(),
        }
    }

    /// The directory containing this node.
    ///
    /// A path without a parent segment (`notes.txt`) is resolved against the
    /// working directory first. A filesystem root is its own parent.
    pub fn parent(&self) -> Directory {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => {
                let absolute = self.path.to_absolute();
                match absolute.parent() {
                    Some(parent) => parent.to_path_buf(),
                    None => absolute,
                }
            }
        };
        Directory::new(parent)
    }

    pub fn parent_as<D: DirectoryRole>(&self) -> D {
        self.parent().cast()
    }

    /// Reinterprets this path as another node type. The result is an
    /// independent value over the same path.
    pub fn cast<T: FromNode>(&self) -> T {
        T::from_node(self.clone())
    }

    pub fn to_directory(&self) -> Directory {
        self.cast()
    }

    pub fn to_file(&self) -> File {
        self.cast()
    }
}

impl FromNode for PathNode {
    fn from_node(node: PathNode) -> Self {
        node
    }
}

impl AsRef<Path> for PathNode {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for PathNode {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for PathNode {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for PathNode {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for PathNode {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn construction_performs_no_io() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target = temp_dir.path().join("never/created");

        let node = PathNode::new(&target);
        let child = node.join("deeper");

        assert!(!node.exists());
        assert!(!child.exists());
        assert!(!temp_dir.path().join("never").exists());
    }

    #[rstest]
    #[case("a/b", "c", "a/b/c")]
    #[case("a", "b/c", "a/b/c")]
    #[case("/root", "x.txt", "/root/x.txt")]
    fn with_child_joins_segments(#[case] parent: &str, #[case] child: &str, #[case] expected: &str) {
        assert_eq!(
            PathNode::with_child(parent, child).path(),
            Path::new(expected)
        );
    }

    #[rstest]
    #[case("a/b/report.txt", "report.txt")]
    #[case("dir/", "dir")]
    #[case("a/..", "..")]
    #[case(".", ".")]
    #[case("a/.", ".")]
    #[case("/", "")]
    fn name_is_final_segment(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(PathNode::from(path).name(), expected);
    }

    #[test]
    fn parent_of_nested_path_is_its_directory_segment() {
        let node = PathNode::from("a/b/c.txt");
        assert_eq!(node.parent().path(), Path::new("a/b"));
    }

    #[test]
    fn parent_of_bare_name_uses_absolute_form() {
        let cwd = std::env::current_dir().expect("Failed to read current dir");
        let node = PathNode::from("c.txt");
        assert_eq!(node.parent().path(), cwd.as_path());
    }

    #[test]
    fn parent_of_root_is_root() {
        let node = PathNode::from("/");
        assert_eq!(node.parent().path(), Path::new("/"));
    }

    #[test]
    fn category_queries_follow_the_filesystem() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("f.txt");
        fs::write(&file_path, "x").expect("Failed to write file");

        let dir = PathNode::new(temp_dir.path());
        let file = PathNode::new(&file_path);
        let missing = PathNode::new(temp_dir.path().join("missing"));

        assert!(dir.is_directory() && !dir.is_file());
        assert!(file.is_file() && !file.is_directory());
        assert!(!missing.is_file() && !missing.is_directory());
    }

    #[test]
    fn equal_paths_are_equal_nodes() {
        let first = PathNode::with_child("a", "b");
        let second = PathNode::from("a/b");
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "a/b");
    }

    #[test]
    fn cast_produces_independent_views_of_one_path() {
        let node = PathNode::from("some/where");
        let as_dir: Directory = node.cast();
        let as_file: File = node.cast();
        let back: PathNode = as_file.cast();

        assert_eq!(as_dir.path(), as_file.path());
        assert_eq!(back, node);
    }
}
