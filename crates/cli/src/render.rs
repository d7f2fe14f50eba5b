//! Report output formats.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use staffgraph_kernel::Report;

use crate::config::OutputFormat;

pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Table => render_table(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)? + "\n",
    })
}

/// Every node's name, each manager's team indented underneath, then the
/// salary total. An empty report renders as nothing.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    if report.is_empty() {
        return out;
    }

    for entry in &report.entries {
        out.push_str(&format!("{}\n", entry.first_name));
        if !entry.members.is_empty() {
            out.push_str(&format!("Employees of {}\n", entry.first_name));
            for member in &entry.members {
                out.push_str(&format!("\t{member}\n"));
            }
            out.push('\n');
        }
    }

    out.push_str(&format!("\ntotal_salary = {}\n", report.total_salary));
    out
}

pub fn render_table(report: &Report) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Role", "Manager", "Salary", "Members"]);

    for entry in &report.entries {
        let manager = entry
            .manager
            .and_then(|id| report.entries.iter().find(|e| e.id == id))
            .map(|m| m.first_name.clone())
            .unwrap_or_default();

        table.add_row(vec![
            entry.id.to_string(),
            entry.first_name.clone(),
            (if entry.is_manager { "manager" } else { "employee" }).to_string(),
            manager,
            entry.salary.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
            entry.members.join(", "),
        ]);
    }

    format!("{table}\n\ntotal_salary = {}\n", report.total_salary)
}
