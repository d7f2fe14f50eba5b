use std::io::Write;
use std::path::Path;

use staffgraph_loader::list_json_files;

use crate::config::CliConfig;

/// File names relative to the resources dir, numbered from 1.
pub fn numbered_files(dir: &Path) -> anyhow::Result<Vec<String>> {
    let files = list_json_files(dir)?;
    Ok(files
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let name = path.strip_prefix(dir).unwrap_or(path.as_path());
            format!("{}. {}", i + 1, name.display())
        })
        .collect())
}

pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> anyhow::Result<()> {
    for line in numbered_files(&config.resources_dir)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
