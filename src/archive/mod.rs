//! Reading archive listings.
//!
//! The binary format, decompression and checksums are the `zip` crate's
//! business. This module only adapts its records to [`ArchiveEntry`]
//! so they can be fed to the tree builder.
//!
//! [`ArchiveEntry`]: crate::entry::ArchiveEntry

mod listing;
mod reader;
mod structures;

pub use listing::format_listing;
pub use reader::ArchiveReader;
pub use structures::ZipEntryInfo;
