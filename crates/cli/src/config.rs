use std::path::PathBuf;

use clap::ValueEnum;

pub const RESOURCES_ENV: &str = "STAFFGRAPH_RESOURCES";
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain listing with per-manager teams and the salary total.
    #[default]
    Text,
    /// Bordered table.
    Table,
    /// Pretty-printed JSON report.
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub resources_dir: PathBuf,
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            resources_dir: PathBuf::from(DEFAULT_RESOURCES_DIR),
            format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    pub fn new(resources_dir: impl Into<PathBuf>) -> Self {
        Self {
            resources_dir: resources_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
