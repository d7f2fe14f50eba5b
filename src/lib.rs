// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! staffgraph-kernel: validates flat employee records and builds the
//! management hierarchy used for reporting.

pub mod config;
pub mod error;
pub mod types;
pub mod validate;
pub mod graph;
pub mod builder;
pub mod report;

#[cfg(test)]
pub mod tests;

pub use builder::{build_from_raw, build_graph};
pub use error::{KernelError, Result};
pub use graph::{Node, NodeMapper, OrgGraph};
pub use report::{generate_report, Report, ReportEntry};
pub use types::{EmployeeId, RawRecord, ValidatedRecord};
