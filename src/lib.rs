//! # ziptree
//!
//! Rebuild the directory hierarchy of a ZIP archive from its flat entry
//! list.
//!
//! ZIP archives store entries as a flat sequence of slash-separated paths.
//! Directory markers (`dir/`) are optional, so a directory may exist only
//! as a prefix of the files inside it. This library groups file entries by
//! parent directory, materialises the missing levels, and answers questions
//! over the result such as which directories are leaves.
//!
//! ## Features
//!
//! - Works on any listing that implements [`ArchiveEntry`]
//! - Synthesises intermediate directories that have no marker entry
//! - Keeps equally named directories in different branches apart
//! - Reads listings from ZIP files through the `zip` crate
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use ziptree::{ArchiveReader, build_tree, find_leaf_directories};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut reader = ArchiveReader::open(Path::new("archive.zip"))?;
//!     let entries = reader.entries_sorted()?;
//!
//!     let root = build_tree(&entries);
//!     for name in find_leaf_directories(&root) {
//!         println!("{name}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod entry;
pub mod tree;

pub use archive::{ArchiveReader, ZipEntryInfo, format_listing};
pub use cli::Cli;
pub use entry::{ArchiveEntry, Entry};
pub use tree::{
    DirectoryNode, TreeBuilder, build_tree, find_leaf_directories, find_leaf_directory_paths,
    group_by_parent,
};
