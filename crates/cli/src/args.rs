use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{OutputFormat, DEFAULT_RESOURCES_DIR, RESOURCES_ENV};

#[derive(Parser, Debug)]
#[command(name = "staffgraph")]
#[command(about = "Employee hierarchy and salary report generator", long_about = None)]
pub struct Cli {
    /// Directory holding the employee JSON files.
    #[arg(long, short, global = true, env = RESOURCES_ENV, default_value = DEFAULT_RESOURCES_DIR)]
    pub resources_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the report for one file.
    Report {
        /// File name, relative to the resources directory.
        file: String,

        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the JSON files in the resources directory.
    List,
    /// Pick files interactively and print their reports.
    Browse {
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}
