use super::path::{SEPARATOR, classify, split_segments};
use crate::entry::ArchiveEntry;

/// One directory level of a rebuilt archive tree.
///
/// Nodes borrow the file entries and the optional directory marker from
/// the listing they were built from; the listing must outlive the tree.
#[derive(Debug, PartialEq, Eq)]
pub struct DirectoryNode<'a, E> {
    name: String,
    full_path: String,
    depth: usize,
    sub_directories: Vec<DirectoryNode<'a, E>>,
    files: Vec<&'a E>,
    marker: Option<&'a E>,
}

impl<'a, E> DirectoryNode<'a, E> {
    pub(crate) fn root() -> Self {
        Self {
            name: String::new(),
            full_path: String::new(),
            depth: 0,
            sub_directories: Vec::new(),
            files: Vec::new(),
            marker: None,
        }
    }

    /// Build (but do not attach) a child of `self` named `name`.
    pub(crate) fn new_child(&self, name: &str, marker: Option<&'a E>) -> Self {
        Self {
            name: name.to_string(),
            full_path: self.child_path(name),
            depth: self.depth + 1,
            sub_directories: Vec::new(),
            files: Vec::new(),
            marker,
        }
    }

    /// Full path a child named `name` would get.
    pub(crate) fn child_path(&self, name: &str) -> String {
        if self.is_root() {
            name.to_string()
        } else {
            format!("{}{SEPARATOR}{name}", self.full_path)
        }
    }

    pub(crate) fn child_index(&self, name: &str) -> Option<usize> {
        self.sub_directories.iter().position(|d| d.name == name)
    }

    pub(crate) fn sub_directories_mut(&mut self) -> &mut Vec<DirectoryNode<'a, E>> {
        &mut self.sub_directories
    }

    pub(crate) fn push_file(&mut self, file: &'a E) {
        self.files.push(file);
    }

    /// Leaf segment of this directory's path; empty for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slash-joined names from the root down to this node; empty for the root.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Number of levels below the root (the root is 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn sub_directories(&self) -> &[DirectoryNode<'a, E>] {
        &self.sub_directories
    }

    /// File entries whose parent directory path is this node's full path,
    /// in listing order.
    pub fn files(&self) -> &[&'a E] {
        &self.files
    }

    /// The directory-marker entry this node was created from, if the
    /// listing had one.
    pub fn marker(&self) -> Option<&'a E> {
        self.marker
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// A directory without sub-directories, whether or not it holds files.
    pub fn is_leaf(&self) -> bool {
        self.sub_directories.is_empty()
    }

    /// Direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&DirectoryNode<'a, E>> {
        self.sub_directories.iter().find(|d| d.name == name)
    }

    /// Resolve a slash-separated directory path relative to this node.
    /// `""` resolves to the node itself.
    pub fn find(&self, path: &str) -> Option<&DirectoryNode<'a, E>> {
        let mut node = self;
        for segment in split_segments(path) {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// Total number of files in this subtree.
    pub fn file_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += node.files.len();
            stack.extend(node.sub_directories.iter());
        }
        count
    }
}

impl<E: ArchiveEntry> DirectoryNode<'_, E> {
    /// Leaf names of this directory's files, in listing order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.files.iter().map(|f| classify(f.path()).leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    #[test]
    fn child_paths_follow_depth_not_emptiness() {
        let root: DirectoryNode<'_, Entry> = DirectoryNode::root();
        assert!(root.is_root());
        assert_eq!(root.child_path("a"), "a");

        let empty = root.new_child("", None);
        assert_eq!(empty.full_path(), "");
        assert!(!empty.is_root());
        assert_eq!(empty.child_path("a"), "/a");
    }

    #[test]
    fn find_walks_direct_children() {
        let mut root: DirectoryNode<'_, Entry> = DirectoryNode::root();
        let a = root.new_child("a", None);
        root.sub_directories_mut().push(a);
        let b = root.sub_directories()[0].new_child("b", None);
        root.sub_directories_mut()[0].sub_directories_mut().push(b);

        assert_eq!(root.find("").map(|n| n.full_path()), Some(""));
        assert_eq!(root.find("a/b").map(|n| n.depth()), Some(2));
        assert!(root.find("b").is_none());
        assert_eq!(root.child_index("a"), Some(0));
    }

    #[test]
    fn file_count_covers_subtree() {
        let files = [Entry::file("x"), Entry::file("a/y"), Entry::file("a/z")];
        let mut root = DirectoryNode::root();
        root.push_file(&files[0]);
        let mut a = root.new_child("a", None);
        a.push_file(&files[1]);
        a.push_file(&files[2]);
        root.sub_directories_mut().push(a);

        assert_eq!(root.file_count(), 3);
        assert_eq!(
            root.child("a").unwrap().file_names().collect::<Vec<_>>(),
            vec!["y", "z"]
        );
    }
}
