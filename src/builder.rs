// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Two-pass hierarchy construction.
//!
//! Pass one indexes every record by id so a record may name a manager that
//! appears later in the input. Pass two links each record to its manager,
//! promoting the manager node on first use.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{KernelError, Result};
use crate::graph::org::OrgGraph;
use crate::graph::pool::NodeMapper;
use crate::types::id::EmployeeId;
use crate::types::record::{RawRecord, ValidatedRecord};
use crate::validate::validate_records;

/// Records keyed by id, iterated in first-seen order.
pub struct RecordIndex<'a> {
    by_id: FxHashMap<EmployeeId, &'a ValidatedRecord>,
    order: Vec<&'a ValidatedRecord>,
}

impl<'a> RecordIndex<'a> {
    /// Fails on the first id seen twice.
    pub fn build(records: &'a [ValidatedRecord]) -> Result<Self> {
        let mut by_id = FxHashMap::default();
        by_id.reserve(records.len());
        let mut order = Vec::with_capacity(records.len());

        for record in records {
            if by_id.insert(record.id, record).is_some() {
                return Err(KernelError::DuplicateId(record.id));
            }
            order.push(record);
        }

        Ok(Self { by_id, order })
    }

    pub fn get(&self, id: EmployeeId) -> Option<&'a ValidatedRecord> {
        self.by_id.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ValidatedRecord> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Builds the management hierarchy from validated records.
///
/// Fails fast on duplicate ids and on manager ids with no record. A failed
/// build returns no partial graph.
pub fn build_graph(records: &[ValidatedRecord]) -> Result<OrgGraph> {
    let index = RecordIndex::build(records)?;
    debug!(records = index.len(), "indexed records");

    let mut mapper = NodeMapper::new();
    for record in index.iter() {
        let id = mapper.resolve_employee(record).id();

        let Some(manager_id) = record.manager_id else {
            continue;
        };
        let manager_record = index
            .get(manager_id)
            .ok_or(KernelError::ManagerNotFound(manager_id))?;

        mapper.resolve_manager(manager_record)?;
        mapper.set_manager(id, manager_id)?;
    }

    debug!(nodes = mapper.len(), "linked hierarchy");
    Ok(OrgGraph::new(mapper))
}

/// Validates every raw record, then builds the hierarchy.
pub fn build_from_raw(raw: &[RawRecord]) -> Result<OrgGraph> {
    let records = validate_records(raw)?;
    build_graph(&records)
}
