//! Interactive loop: pick a file, print its report, repeat.

use std::io::{BufRead, Write};

use staffgraph_kernel::KernelError;
use staffgraph_loader::LoaderError;

use crate::commands::list::numbered_files;
use crate::commands::report::load_report;
use crate::config::CliConfig;
use crate::render::render;

const SEPARATOR: &str = "\n--------------------\n";

enum Next {
    Again,
    Exit,
}

/// Runs until the user answers `N` or input ends.
pub fn run<R: BufRead, W: Write>(config: &CliConfig, input: &mut R, out: &mut W) -> anyhow::Result<()> {
    loop {
        writeln!(
            out,
            "\nplease input one of the following stored in {} path or press N to exit\n",
            config.resources_dir.display()
        )?;
        match numbered_files(&config.resources_dir) {
            Ok(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Err(err) => writeln!(out, "cannot list resources: {err}")?,
        }
        writeln!(out, "{SEPARATOR}")?;

        let Some(file) = read_answer(input)? else {
            break;
        };
        if file.eq_ignore_ascii_case("n") {
            break;
        }

        writeln!(out, "\nstart generating report...\n")?;
        let report = match load_report(config, &file) {
            Ok(report) => report,
            Err(err) => {
                writeln!(out, "{}\n", describe(&err, &file))?;
                continue;
            }
        };

        writeln!(out, "{SEPARATOR}")?;
        out.write_all(render(&report, config.format)?.as_bytes())?;
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "the above is {file} report\n")?;

        match ask_continue(input, out)? {
            Next::Again => writeln!(out, "********************")?,
            Next::Exit => break,
        }
    }

    writeln!(out, "bye bye")?;
    Ok(())
}

fn ask_continue<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<Next> {
    loop {
        writeln!(out, "continue ? Y/N")?;
        let Some(answer) = read_answer(input)? else {
            return Ok(Next::Exit);
        };
        match answer.to_ascii_uppercase().as_str() {
            "Y" => return Ok(Next::Again),
            "N" => return Ok(Next::Exit),
            _ => {}
        }
    }
}

/// Next trimmed line, or `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn describe(err: &anyhow::Error, file: &str) -> String {
    if let Some(loader) = err.downcast_ref::<LoaderError>() {
        return match loader {
            LoaderError::NotFound(_) => format!("file not found: {file}"),
            LoaderError::Json(_) | LoaderError::InvalidFormat(_) => {
                format!("the json file has wrong format: {file}")
            }
            LoaderError::IoError(e) => format!("something went wrong: {e}"),
        };
    }
    if let Some(kernel) = err.downcast_ref::<KernelError>() {
        return format!("something went wrong: {kernel}");
    }
    format!("something went wrong: {err}")
}
