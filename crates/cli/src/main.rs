use std::io::{self, Write};

use clap::Parser;
use staffgraph_cli::args::{Cli, Commands};
use staffgraph_cli::commands::{browse, list, report};
use staffgraph_cli::config::CliConfig;
use staffgraph_cli::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = CliConfig::new(cli.resources_dir);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Report { file, format } => {
            report::run(&config.with_format(format), &file, &mut out)?
        }
        Commands::List => list::run(&config, &mut out)?,
        Commands::Browse { format } => {
            let stdin = io::stdin();
            browse::run(&config.with_format(format), &mut stdin.lock(), &mut out)?
        }
    }

    out.flush()?;
    Ok(())
}
