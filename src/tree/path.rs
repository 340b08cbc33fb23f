/// Path separator used inside archives, regardless of host platform.
pub const SEPARATOR: char = '/';

/// A path split at its last separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentAndLeaf<'a> {
    /// Everything before the last `/`, or `""` if there is none.
    pub parent: &'a str,
    /// Everything after the last `/`.
    pub leaf: &'a str,
}

/// Split `path` into its parent directory path and leaf name.
///
/// Total for any input: `""` classifies as `("", "")` and a path without a
/// separator belongs to the root.
pub fn classify(path: &str) -> ParentAndLeaf<'_> {
    match path.rfind(SEPARATOR) {
        Some(i) => ParentAndLeaf {
            parent: &path[..i],
            leaf: &path[i + 1..],
        },
        None => ParentAndLeaf {
            parent: "",
            leaf: path,
        },
    }
}

/// Split a directory path into the segments walked from the root.
///
/// The empty path has no segments. Empty segments (leading or doubled
/// slashes) are kept so they become empty-named directories.
pub fn split_segments(dir: &str) -> Vec<&str> {
    if dir.is_empty() {
        Vec::new()
    } else {
        dir.split(SEPARATOR).collect()
    }
}
