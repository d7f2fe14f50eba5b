//! Node registry keyed by employee id.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{KernelError, Result};
use crate::graph::node::{Employee, Manager, Node};
use crate::types::id::EmployeeId;
use crate::types::record::ValidatedRecord;

/// Maps employee ids to nodes and remembers creation order.
#[derive(Debug, Default, Clone)]
pub struct NodeMapper {
    pub(crate) nodes: FxHashMap<EmployeeId, Node>,
    pub(crate) order: Vec<EmployeeId>,
}

impl NodeMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `record.id`, creating a plain employee if none
    /// exists. An existing node is returned untouched, whatever its variant.
    pub fn resolve_employee(&mut self, record: &ValidatedRecord) -> &Node {
        let id = record.id;
        if !self.nodes.contains_key(&id) {
            self.order.push(id);
        }
        self.nodes
            .entry(id)
            .or_insert_with(|| Node::Employee(Employee::from_record(record)))
    }

    /// Returns the manager node for `record.id`, promoting an existing
    /// employee in place.
    ///
    /// Promotion keeps id, name, salary and manager link, and re-registers
    /// the promoted node with its own manager so that manager still lists it
    /// exactly once.
    pub fn resolve_manager(&mut self, record: &ValidatedRecord) -> Result<&Manager> {
        let id = record.id;
        let (manager, promoted) = match self.nodes.remove(&id) {
            Some(node) => {
                let promoted = !node.is_manager();
                (node.into_manager(), promoted)
            }
            None => {
                self.order.push(id);
                (Manager::from(Employee::from_record(record)), false)
            }
        };

        let owner = manager.employee.manager.filter(|_| promoted);
        self.nodes.insert(id, Node::Manager(manager));

        if promoted {
            debug!(%id, "promoted employee to manager");
        }
        if let Some(owner) = owner {
            self.register(owner, id)?;
        }

        self.nodes
            .get(&id)
            .and_then(Node::as_manager)
            .ok_or(KernelError::NotAManager(id))
    }

    /// Lists `member` under `manager`, replacing an entry with the same id.
    pub fn register(&mut self, manager: EmployeeId, member: EmployeeId) -> Result<()> {
        match self.nodes.get_mut(&manager) {
            Some(Node::Manager(m)) => {
                m.register(member);
                Ok(())
            }
            Some(Node::Employee(_)) => Err(KernelError::NotAManager(manager)),
            None => Err(KernelError::NullArgument("manager")),
        }
    }

    /// Points `member` at `manager` and registers it in the manager's list.
    /// A previous, different manager drops the member from its list.
    pub fn set_manager(&mut self, member: EmployeeId, manager: EmployeeId) -> Result<()> {
        match self.nodes.get(&manager) {
            None => return Err(KernelError::NullArgument("manager")),
            Some(node) if !node.is_manager() => return Err(KernelError::NotAManager(manager)),
            Some(_) => {}
        }

        let node = self
            .nodes
            .get_mut(&member)
            .ok_or(KernelError::NullArgument("member"))?;
        let previous = node.base_mut().manager.replace(manager);

        if let Some(previous) = previous.filter(|p| *p != manager) {
            if let Some(Node::Manager(old)) = self.nodes.get_mut(&previous) {
                old.unregister(member);
            }
        }
        self.register(manager, member)
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// All nodes created so far, in creation order.
    pub fn all_nodes(&self) -> Vec<&Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id)).collect()
    }

    /// Direct reports of `id`, sorted by first name. Ties keep registration
    /// order. Unknown ids and plain employees yield an empty list.
    pub fn member_list(&self, id: EmployeeId) -> Vec<&Node> {
        let Some(node) = self.nodes.get(&id) else {
            return Vec::new();
        };
        let mut members: Vec<&Node> = node
            .members()
            .iter()
            .filter_map(|m| self.nodes.get(m))
            .collect();
        members.sort_by(|a, b| a.first_name().cmp(b.first_name()));
        members
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
