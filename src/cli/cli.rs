use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    application::data::LogLevel, config::SETTINGS_FILE_NAME, content::Encoding, node::EntryOrder,
};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Inspect and edit files through typed path handles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,

    /// Settings file supplying defaults for encoding, order and compression
    #[clap(long, short, default_value = SETTINGS_FILE_NAME, global = true)]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the entries of a directory
    Ls {
        path: PathBuf,
        /// Descend into subdirectories (depth-first, pre-order)
        #[clap(long, short)]
        recursive: bool,
        /// Only list regular files
        #[clap(long, conflicts_with = "dirs")]
        files: bool,
        /// Only list directories
        #[clap(long)]
        dirs: bool,
        /// Only list entries whose extension matches
        #[clap(long)]
        ext: Option<String>,
        #[clap(long, value_enum)]
        order: Option<EntryOrder>,
    },
    /// Print a text file; `.zst` files are decompressed
    Cat {
        path: PathBuf,
        #[clap(long, short, value_enum)]
        encoding: Option<Encoding>,
    },
    /// Replace a text file's contents; `.zst` files are compressed
    Write {
        path: PathBuf,
        content: String,
        /// Leave an existing file untouched
        #[clap(long)]
        if_not_exists: bool,
        #[clap(long, short, value_enum)]
        encoding: Option<Encoding>,
    },
    /// Create a directory and its missing ancestors
    Mkdir { path: PathBuf },
    /// Delete a file, or a directory with everything inside it
    Rm { path: PathBuf },
}
