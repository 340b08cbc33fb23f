//! Read-only traversals over a built tree.
//!
//! Every traversal is depth-first pre-order with sub-directories visited
//! in stored order. An explicit stack is used instead of recursion.

use super::node::DirectoryNode;
use super::path::classify;
use crate::entry::ArchiveEntry;

/// All nodes of the tree, root first, depth-first pre-order.
pub fn walk<'t, 'a, E>(root: &'t DirectoryNode<'a, E>) -> Vec<&'t DirectoryNode<'a, E>> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.sub_directories().iter().rev());
    }
    out
}

/// Directories without sub-directories. A leaf is emitted as soon as it
/// is reached; the root is a leaf when the archive has no directories.
pub fn leaf_directories<'t, 'a, E>(
    root: &'t DirectoryNode<'a, E>,
) -> Vec<&'t DirectoryNode<'a, E>> {
    walk(root).into_iter().filter(|d| d.is_leaf()).collect()
}

/// Names of the leaf directories.
pub fn find_leaf_directories<E>(root: &DirectoryNode<'_, E>) -> Vec<String> {
    leaf_directories(root)
        .into_iter()
        .map(|d| d.name().to_string())
        .collect()
}

/// Full paths of the leaf directories.
pub fn find_leaf_directory_paths<E>(root: &DirectoryNode<'_, E>) -> Vec<String> {
    leaf_directories(root)
        .into_iter()
        .map(|d| d.full_path().to_string())
        .collect()
}

/// Indented text rendering of the tree, two spaces per level.
///
/// Directories carry a trailing `/`; at each level sub-directories are
/// listed before files. The root itself is not printed.
pub fn render<E: ArchiveEntry>(root: &DirectoryNode<'_, E>) -> String {
    enum Line<'t, 'a, E> {
        Dir(&'t DirectoryNode<'a, E>),
        File(&'a E, usize),
    }

    let mut out = String::new();
    let mut stack: Vec<Line<'_, '_, E>> = Vec::new();
    push_contents(&mut stack, root);

    fn push_contents<'t, 'a, E>(
        stack: &mut Vec<Line<'t, 'a, E>>,
        node: &'t DirectoryNode<'a, E>,
    ) {
        for &file in node.files().iter().rev() {
            stack.push(Line::File(file, node.depth()));
        }
        for dir in node.sub_directories().iter().rev() {
            stack.push(Line::Dir(dir));
        }
    }

    while let Some(line) = stack.pop() {
        match line {
            Line::Dir(dir) => {
                let indent = "  ".repeat(dir.depth() - 1);
                out.push_str(&format!("{indent}{}/\n", dir.name()));
                push_contents(&mut stack, dir);
            }
            Line::File(file, depth) => {
                let indent = "  ".repeat(depth);
                out.push_str(&format!("{indent}{}\n", classify(file.path()).leaf));
            }
        }
    }

    out
}
