//! Rebuilding a directory hierarchy from a flat archive listing.
//!
//! The listing is reduced to file entries, grouped by parent directory
//! path, and each group is hung under a node chain that is created on
//! demand from the root. Directory markers are optional: a directory that
//! only shows up as a prefix of a file path is synthesised without one.

use std::collections::HashMap;

use log::{debug, trace};

use super::node::DirectoryNode;
use super::path::{classify, split_segments};
use crate::entry::ArchiveEntry;

/// Files of a listing grouped by parent directory path, groups in the
/// order their first file was seen.
pub type ParentGroups<'a, E> = Vec<(&'a str, Vec<&'a E>)>;

/// Group file entries by parent directory path.
///
/// Directory markers are skipped. Both the order of groups (first
/// occurrence) and the order of files inside a group follow `entries`.
pub fn group_by_parent<'a, E, I>(entries: I) -> ParentGroups<'a, E>
where
    E: ArchiveEntry + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut groups: ParentGroups<'a, E> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for entry in entries.into_iter().filter(|e| !e.is_directory()) {
        let parent = classify(entry.path()).parent;
        match index.get(parent) {
            Some(&i) => groups[i].1.push(entry),
            None => {
                index.insert(parent, groups.len());
                groups.push((parent, vec![entry]));
            }
        }
    }

    groups
}

/// Build a tree with default options.
pub fn build_tree<'a, E, I>(entries: I) -> DirectoryNode<'a, E>
where
    E: ArchiveEntry + 'a,
    I: IntoIterator<Item = &'a E>,
{
    TreeBuilder::default().build(entries)
}

/// Options for turning an archive listing into a [`DirectoryNode`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    include_empty_directories: bool,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also create nodes for directory markers that contain no files.
    ///
    /// Off by default: only directories leading to at least one file end
    /// up in the tree.
    pub fn include_empty_directories(mut self, include: bool) -> Self {
        self.include_empty_directories = include;
        self
    }

    /// Build the tree for `entries` and return its root.
    ///
    /// Never fails. Empty path segments produced by leading or doubled
    /// slashes become directories with an empty name.
    pub fn build<'a, E, I>(&self, entries: I) -> DirectoryNode<'a, E>
    where
        E: ArchiveEntry + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let entries: Vec<&'a E> = entries.into_iter().collect();
        let markers = MarkerIndex::new(&entries);
        let groups = group_by_parent(entries.iter().copied());

        debug!(
            "building tree from {} entries: {} directory groups, {} markers",
            entries.len(),
            groups.len(),
            markers.len()
        );

        let mut root = DirectoryNode::root();
        for (parent, files) in groups {
            let node = ensure_directory(&mut root, parent, &markers);
            for file in files {
                trace!("placing {:?} under {:?}", file.path(), node.full_path());
                node.push_file(file);
            }
        }

        if self.include_empty_directories {
            for dir in markers.paths() {
                ensure_directory(&mut root, dir, &markers);
            }
        }

        root
    }
}

/// Directory markers keyed by their path without the trailing slash.
struct MarkerIndex<'a, E> {
    by_path: HashMap<&'a str, &'a E>,
    order: Vec<&'a str>,
}

impl<'a, E: ArchiveEntry> MarkerIndex<'a, E> {
    fn new(entries: &[&'a E]) -> Self {
        let mut by_path = HashMap::new();
        let mut order = Vec::new();
        for &entry in entries.iter().filter(|e| e.is_directory()) {
            let path = entry.path();
            let key = path.strip_suffix('/').unwrap_or(path);
            if by_path.contains_key(key) {
                debug!("ignoring duplicate directory marker {path:?}");
                continue;
            }
            by_path.insert(key, entry);
            order.push(key);
        }
        Self { by_path, order }
    }

    fn get(&self, dir: &str) -> Option<&'a E> {
        self.by_path.get(dir).copied()
    }

    fn paths(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.order.iter().copied()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

/// Walk from `root` to the node for `dir`, creating missing levels.
///
/// Each segment is matched only against the current node's direct
/// children, so equally named directories in different branches stay
/// separate.
fn ensure_directory<'t, 'a, E: ArchiveEntry>(
    root: &'t mut DirectoryNode<'a, E>,
    dir: &str,
    markers: &MarkerIndex<'a, E>,
) -> &'t mut DirectoryNode<'a, E> {
    let mut node = root;
    for segment in split_segments(dir) {
        let index = match node.child_index(segment) {
            Some(i) => i,
            None => {
                let path = node.child_path(segment);
                let marker = markers.get(&path);
                if marker.is_none() {
                    debug!("synthesizing directory {path:?} without a marker entry");
                }
                let child = node.new_child(segment, marker);
                let children = node.sub_directories_mut();
                children.push(child);
                children.len() - 1
            }
        };
        node = &mut node.sub_directories_mut()[index];
    }
    node
}
