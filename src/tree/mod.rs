//! Directory trees rebuilt from flat archive listings.
//!
//! ## Architecture
//!
//! - [`path`]: splitting an entry path into parent directory and leaf name
//! - `builder`: grouping file entries by parent and materialising nodes
//! - `query`: traversals over a finished tree (leaf directories, rendering)
//!
//! ## Example
//!
//! ```
//! use ziptree::Entry;
//! use ziptree::tree::{build_tree, find_leaf_directories};
//!
//! let entries = vec![
//!     Entry::directory("A/"),
//!     Entry::file("A/x.txt"),
//!     Entry::file("A/B/y.txt"),
//! ];
//! let root = build_tree(&entries);
//!
//! assert_eq!(root.find("A/B").unwrap().files().len(), 1);
//! assert_eq!(find_leaf_directories(&root), vec!["B"]);
//! ```

mod builder;
mod node;
pub mod path;
mod query;

pub use builder::{ParentGroups, TreeBuilder, build_tree, group_by_parent};
pub use node::DirectoryNode;
pub use path::{ParentAndLeaf, classify};
pub use query::{
    find_leaf_directories, find_leaf_directory_paths, leaf_directories, render, walk,
};
