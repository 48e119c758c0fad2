use crate::node::PathNode;

/// Conversion from a generic node into a typed view over the same path.
///
/// Every node type implements this, so [`PathNode::cast`] is checked at
/// compile time and cannot fail.
pub trait FromNode: Sized {
    fn from_node(node: PathNode) -> Self;
}

/// Node types that play the directory role.
pub trait DirectoryRole: FromNode {}

/// Node types that play the file role.
pub trait FileRole: FromNode {}
