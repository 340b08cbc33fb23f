//! The boundary between an archive reader and the tree builder.
//!
//! Whatever produces the archive listing only has to expose two things per
//! record: the slash-separated path and whether the record marks a
//! directory. Directory markers conventionally end in `/`; file paths do not.

/// A single record from an archive listing.
pub trait ArchiveEntry {
    /// Full slash-separated path of the record, without a leading slash.
    fn path(&self) -> &str;

    /// `true` for directory markers, `false` for files.
    fn is_directory(&self) -> bool;
}

impl<T: ArchiveEntry + ?Sized> ArchiveEntry for &T {
    fn path(&self) -> &str {
        (**self).path()
    }

    fn is_directory(&self) -> bool {
        (**self).is_directory()
    }
}

/// Owned archive record, handy when the listing does not come from a real
/// archive (tests, synthetic listings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    pub is_directory: bool,
}

impl Entry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: false,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: true,
        }
    }
}

impl ArchiveEntry for Entry {
    fn path(&self) -> &str {
        &self.path
    }

    fn is_directory(&self) -> bool {
        self.is_directory
    }
}
