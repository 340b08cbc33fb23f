//! Main entry point for the ziptree CLI application.
//!
//! Reads the listing of a ZIP archive and prints the rebuilt directory
//! tree, its leaf directories, its files grouped by directory, or a
//! listing with entry sizes.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::Path;

use ziptree::tree::{classify, render, walk};
use ziptree::{
    ArchiveEntry, ArchiveReader, Cli, TreeBuilder, ZipEntryInfo, find_leaf_directories,
    find_leaf_directory_paths, format_listing, group_by_parent,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut reader = ArchiveReader::open(Path::new(&cli.file))?;
    let entries = if cli.unsorted {
        reader.list_entries()?
    } else {
        reader.entries_sorted()?
    };
    info!("{}: {} entries", cli.file, entries.len());

    if cli.sizes {
        print!("{}", format_listing(&entries));
        return Ok(());
    }

    if cli.grouped {
        print_groups(&entries, cli.full_paths);
        return Ok(());
    }

    let root = TreeBuilder::new()
        .include_empty_directories(cli.empty_dirs)
        .build(&entries);

    if cli.leaves {
        let leaves = if cli.full_paths {
            find_leaf_directory_paths(&root)
        } else {
            find_leaf_directories(&root)
        };
        for leaf in leaves {
            println!("{leaf}");
        }
        return Ok(());
    }

    print!("{}", render(&root));
    if !cli.quiet {
        // The root is not counted as a directory.
        let directories = walk(&root).len() - 1;
        println!("\n{} directories, {} files", directories, root.file_count());
    }

    Ok(())
}

/// Print every parent directory followed by its files, indented.
///
/// Files directly in the archive root are listed under `./`.
fn print_groups(entries: &[ZipEntryInfo], full_paths: bool) {
    for (dir, files) in group_by_parent(entries) {
        if dir.is_empty() {
            println!("./");
        } else {
            println!("{dir}/");
        }
        for file in files {
            let path = file.path();
            let shown = if full_paths {
                path
            } else {
                classify(path).leaf
            };
            println!("  {shown}");
        }
    }
}
