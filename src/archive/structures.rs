use crate::entry::ArchiveEntry;

/// Listing record for one entry of a ZIP archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntryInfo {
    pub name: String,
    pub is_directory: bool,
    pub size: u64,
    pub compressed_size: u64,
}

impl ZipEntryInfo {
    /// Percentage saved by compression, 0 for empty entries.
    pub fn compression_ratio(&self) -> u64 {
        compression_ratio(self.compressed_size, self.size)
    }
}

/// Percentage of `size` saved by storing it in `compressed_size` bytes.
///
/// Sizes come straight from archive headers, so the arithmetic is done in
/// `u128` and never overflows.
pub(crate) fn compression_ratio(compressed_size: u64, size: u64) -> u64 {
    if size == 0 {
        return 0;
    }
    let kept = u128::from(compressed_size) * 100 / u128::from(size);
    100u64.saturating_sub(u64::try_from(kept).unwrap_or(u64::MAX))
}

impl ArchiveEntry for ZipEntryInfo {
    fn path(&self) -> &str {
        &self.name
    }

    fn is_directory(&self) -> bool {
        self.is_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_handles_empty_and_stored_entries() {
        let mut info = ZipEntryInfo {
            name: "a.txt".into(),
            is_directory: false,
            size: 0,
            compressed_size: 0,
        };
        assert_eq!(info.compression_ratio(), 0);

        info.size = 200;
        info.compressed_size = 50;
        assert_eq!(info.compression_ratio(), 75);

        info.compressed_size = 220;
        assert_eq!(info.compression_ratio(), 0);
    }

    #[test]
    fn ratio_survives_header_sized_values() {
        assert_eq!(compression_ratio(u64::MAX, 1), 0);
        assert_eq!(compression_ratio(u64::MAX / 2, u64::MAX), 51);
        assert_eq!(compression_ratio(0, u64::MAX), 100);
    }
}
