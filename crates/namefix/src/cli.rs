//! CLI argument parsing

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "namefix")]
#[command(about = "Batch filename normalizer", long_about = None)]
#[command(after_help = "Use 'namefix <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory to scan (defaults to the current directory)
    #[arg(short, long, default_value = ".", global = true)]
    pub dir: PathBuf,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show proposed renames and write the change log
    #[command(visible_alias = "scan")]
    Preview {
        /// Include files in sub-folders
        #[arg(short, long)]
        recursive: bool,

        /// Also propose folder renames (written to a rename script)
        #[arg(short, long)]
        folders: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Rename every file whose cleaned name differs
    #[command(visible_alias = "write")]
    Apply {
        /// Include files in sub-folders
        #[arg(short, long)]
        recursive: bool,

        /// Also propose folder renames (written to a rename script)
        #[arg(short, long)]
        folders: bool,
    },

    /// Show the cleaned form of names given on the command line
    Check {
        /// File names (not paths) to normalize
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
