use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::debug;
use zip::ZipArchive;

use super::structures::ZipEntryInfo;

/// Upper bound on the buffer reserved up front when extracting an entry.
const MAX_PREALLOC: u64 = 1 << 20;

/// ZIP archive opened for listing and in-memory extraction.
///
/// Parsing and decompression are done by the `zip` crate; this type only
/// turns its records into [`ZipEntryInfo`] values.
pub struct ArchiveReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl ArchiveReader<File> {
    /// Open the archive at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        Self::new(file).with_context(|| format!("Failed to read {}", path.display()))
    }
}

impl<R: Read + Seek> ArchiveReader<R> {
    pub fn new(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader).context("Not a valid ZIP file")?;
        debug!("opened archive with {} entries", archive.len());
        Ok(Self { archive })
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// All entries in central-directory order.
    pub fn list_entries(&mut self) -> Result<Vec<ZipEntryInfo>> {
        let mut entries = Vec::with_capacity(self.archive.len());
        for i in 0..self.archive.len() {
            let file = self
                .archive
                .by_index_raw(i)
                .with_context(|| format!("Failed to read entry #{i}"))?;
            entries.push(ZipEntryInfo {
                name: file.name().to_string(),
                is_directory: file.is_dir(),
                size: file.size(),
                compressed_size: file.compressed_size(),
            });
        }
        Ok(entries)
    }

    /// All entries sorted by name.
    pub fn entries_sorted(&mut self) -> Result<Vec<ZipEntryInfo>> {
        let mut entries = self.list_entries()?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Entry names in central-directory order.
    pub fn entry_names(&mut self) -> Result<Vec<String>> {
        Ok(self.list_entries()?.into_iter().map(|e| e.name).collect())
    }

    /// Decompress the entry called `name` into memory.
    pub fn read_entry(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(name)
            .with_context(|| format!("No entry named {name}"))?;
        if file.is_dir() {
            bail!("{name} is a directory");
        }

        // The declared size comes from the archive and is not trusted.
        let mut buf = Vec::with_capacity(file.size().min(MAX_PREALLOC) as usize);
        file.read_to_end(&mut buf).with_context(|| format!("Failed to extract {name}"))?;
        debug!("extracted {name}: {} bytes", buf.len());
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn sample() -> Cursor<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        zip.start_file("b.txt", options).unwrap();
        zip.write_all(b"b.txt").unwrap();
        zip.add_directory("dir/", options).unwrap();
        zip.start_file("dir/a.txt", options).unwrap();
        zip.write_all(b"dir/a.txt").unwrap();
        let mut cursor = zip.finish().unwrap();
        cursor.set_position(0);
        cursor
    }

    #[test]
    fn lists_in_archive_and_sorted_order() {
        let mut reader = ArchiveReader::new(sample()).unwrap();
        assert_eq!(reader.len(), 3);
        assert_eq!(reader.entry_names().unwrap(), vec!["b.txt", "dir/", "dir/a.txt"]);

        let sorted = reader.entries_sorted().unwrap();
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "dir/", "dir/a.txt"]);
        assert!(sorted[1].is_directory);
        assert_eq!(sorted[2].size, 9);
    }

    #[test]
    fn reads_file_contents() {
        let mut reader = ArchiveReader::new(sample()).unwrap();
        assert_eq!(reader.read_entry("dir/a.txt").unwrap(), b"dir/a.txt");
    }

    #[test]
    fn rejects_directories_and_missing_entries() {
        let mut reader = ArchiveReader::new(sample()).unwrap();
        assert!(reader.read_entry("dir/").is_err());
        assert!(reader.read_entry("nope.txt").is_err());
    }

    /// Single stored zip64 entry whose central-directory uncompressed size
    /// is rewritten to `size`.
    fn with_declared_size(size: u64) -> Cursor<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .large_file(true);
        zip.start_file("big.txt", options).unwrap();
        zip.write_all(b"big.txt").unwrap();
        let mut bytes = zip.finish().unwrap().into_inner();

        let cdfh = bytes.windows(4).position(|w| w == b"PK\x01\x02").unwrap();
        let field =
            |at: usize| u16::from_le_bytes([bytes[cdfh + at], bytes[cdfh + at + 1]]) as usize;
        assert_eq!(
            &bytes[cdfh + 24..cdfh + 28],
            &[0xFF; 4],
            "sizes must live in the zip64 field"
        );

        let mut extra = cdfh + 46 + field(28);
        let extra_end = extra + field(30);
        while extra + 4 <= extra_end {
            let id = u16::from_le_bytes([bytes[extra], bytes[extra + 1]]);
            let len = u16::from_le_bytes([bytes[extra + 2], bytes[extra + 3]]) as usize;
            if id == 0x0001 {
                bytes[extra + 4..extra + 12].copy_from_slice(&size.to_le_bytes());
                return Cursor::new(bytes);
            }
            extra += 4 + len;
        }
        panic!("no zip64 extra field in central directory");
    }

    #[test]
    fn huge_declared_size_does_not_abort_extraction() {
        let mut reader = ArchiveReader::new(with_declared_size(u64::MAX / 2)).unwrap();
        let entries = reader.list_entries().unwrap();
        assert_eq!(entries[0].size, u64::MAX / 2);

        // Either outcome is fine as long as the process survives.
        if let Ok(data) = reader.read_entry("big.txt") {
            assert_eq!(data, b"big.txt");
        }
    }

    #[test]
    fn rejects_non_zip_input() {
        assert!(ArchiveReader::new(Cursor::new(b"not a zip".to_vec())).is_err());
    }
}
