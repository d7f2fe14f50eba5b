// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Finished management hierarchy.

use crate::graph::node::Node;
use crate::graph::pool::NodeMapper;
use crate::types::id::EmployeeId;

/// Read-only view over a fully linked registry.
#[derive(Debug, Default, Clone)]
pub struct OrgGraph {
    mapper: NodeMapper,
}

impl OrgGraph {
    pub(crate) fn new(mapper: NodeMapper) -> Self {
        Self { mapper }
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> Vec<&Node> {
        self.mapper.all_nodes()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Node> {
        self.mapper.get(id)
    }

    pub fn member_list(&self, id: EmployeeId) -> Vec<&Node> {
        self.mapper.member_list(id)
    }

    /// Nodes without a manager, in creation order.
    pub fn roots(&self) -> Vec<&Node> {
        self.nodes().into_iter().filter(|n| !n.has_manager()).collect()
    }

    pub fn len(&self) -> usize {
        self.mapper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapper.is_empty()
    }
}
