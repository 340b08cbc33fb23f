use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "ziptree")]
#[command(version)]
#[command(about = "Show the directory tree of a ZIP archive", long_about = None)]
#[command(after_help = "Examples:\n  \
  ziptree data.zip              print the directory tree of data.zip\n  \
  ziptree -l -f data.zip        list the full paths of all leaf directories\n  \
  ziptree -g data.zip           list files grouped by parent directory\n  \
  ziptree -s data.zip           list entries with sizes and compression ratio")]
pub struct Cli {
    /// ZIP file path
    #[arg(value_name = "FILE")]
    pub file: String,

    /// List leaf directories (directories without sub-directories)
    #[arg(short = 'l')]
    pub leaves: bool,

    /// Print full paths instead of directory names
    #[arg(short = 'f')]
    pub full_paths: bool,

    /// List files grouped by parent directory
    #[arg(short = 'g')]
    pub grouped: bool,

    /// List entries with sizes and compression ratio
    #[arg(short = 's')]
    pub sizes: bool,

    /// Include directory entries that contain no files
    #[arg(short = 'e')]
    pub empty_dirs: bool,

    /// Keep the archive's own entry order instead of sorting by name
    #[arg(long)]
    pub unsorted: bool,

    /// Verbose logging (-vv => trace)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter, used unless `RUST_LOG` is set.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
