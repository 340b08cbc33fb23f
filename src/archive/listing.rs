use super::structures::{ZipEntryInfo, compression_ratio};

const RULE_WIDTH: usize = 40;

/// Table of entries with uncompressed size, compressed size and ratio,
/// followed by a totals line over the file entries.
pub fn format_listing(entries: &[ZipEntryInfo]) -> String {
    let mut out = format!("{:>10}  {:>10}  {:>5}  Name\n", "Length", "Size", "Cmpr");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    let mut total_size = 0u64;
    let mut total_compressed = 0u64;
    let mut file_count = 0usize;

    for entry in entries {
        out.push_str(&format!(
            "{:>10}  {:>10}  {:>4}%  {}\n",
            entry.size,
            entry.compressed_size,
            entry.compression_ratio(),
            entry.name
        ));

        // Directories carry no data of their own.
        if !entry.is_directory {
            total_size = total_size.saturating_add(entry.size);
            total_compressed = total_compressed.saturating_add(entry.compressed_size);
            file_count += 1;
        }
    }

    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:>10}  {:>10}  {:>4}%  {} files\n",
        total_size,
        total_compressed,
        compression_ratio(total_compressed, total_size),
        file_count
    ));
    out
}
