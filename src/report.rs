// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Reporting order and salary aggregation.

use core::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::builder::build_from_raw;
use crate::error::{KernelError, Result};
use crate::graph::node::Node;
use crate::graph::org::OrgGraph;
use crate::types::id::EmployeeId;
use crate::types::record::RawRecord;

/// Root nodes first, managers before plain employees, then by first name.
/// Full ties keep creation order (the sort is stable).
fn report_order(a: &Node, b: &Node) -> Ordering {
    a.has_manager()
        .cmp(&b.has_manager())
        .then_with(|| b.is_manager().cmp(&a.is_manager()))
        .then_with(|| a.first_name().cmp(b.first_name()))
}

pub fn ordered_nodes(graph: &OrgGraph) -> Vec<&Node> {
    let mut nodes = graph.nodes();
    nodes.sort_by(|a, b| report_order(a, b));
    nodes
}

/// Sum of all present salaries. Missing salaries count as zero.
pub fn total_salary<'a, I>(nodes: I) -> Result<i64>
where
    I: IntoIterator<Item = &'a Node>,
{
    nodes
        .into_iter()
        .filter_map(Node::salary)
        .try_fold(0i64, |acc, s| acc.checked_add(s))
        .ok_or(KernelError::SalaryOverflow)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub id: EmployeeId,
    pub first_name: String,
    pub salary: Option<i64>,
    pub is_manager: bool,
    pub manager: Option<EmployeeId>,
    /// First names of direct reports, sorted.
    pub members: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub total_salary: i64,
}

impl Report {
    pub fn from_graph(graph: &OrgGraph) -> Result<Self> {
        let ordered = ordered_nodes(graph);
        let total_salary = total_salary(ordered.iter().copied())?;

        let entries = ordered
            .into_iter()
            .map(|node| ReportEntry {
                id: node.id(),
                first_name: node.first_name().to_string(),
                salary: node.salary(),
                is_manager: node.is_manager(),
                manager: node.manager(),
                members: graph
                    .member_list(node.id())
                    .into_iter()
                    .map(|m| m.first_name().to_string())
                    .collect(),
            })
            .collect();

        debug!(total_salary, "report assembled");
        Ok(Self {
            entries,
            total_salary,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate, build, order and aggregate in one pass.
pub fn generate_report(raw: &[RawRecord]) -> Result<Report> {
    let graph = build_from_raw(raw)?;
    Report::from_graph(&graph)
}
