use std::io::Write;

use anyhow::Context;
use staffgraph_kernel::{generate_report, Report};
use staffgraph_loader::{read_records, resolve};

use crate::config::CliConfig;
use crate::render::render;

/// Loads `file` from the resources dir and builds its report.
///
/// Errors are returned as-is so callers can tell loader failures from
/// validation failures.
pub fn load_report(config: &CliConfig, file: &str) -> anyhow::Result<Report> {
    let path = resolve(&config.resources_dir, file);
    tracing::info!(path = %path.display(), "generating report");

    let raw = read_records(&path)?;
    Ok(generate_report(&raw)?)
}

pub fn run<W: Write>(config: &CliConfig, file: &str, out: &mut W) -> anyhow::Result<()> {
    let report = load_report(config, file)
        .with_context(|| format!("failed to generate report for {file}"))?;

    out.write_all(render(&report, config.format)?.as_bytes())?;
    Ok(())
}
