//! Graph Node definition.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::types::id::EmployeeId;
use crate::types::record::ValidatedRecord;

/// Fields shared by every node. The `manager` link is an id, never an owning
/// reference, so the hierarchy has no ownership cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub salary: Option<i64>,
    pub manager: Option<EmployeeId>,
}

impl Employee {
    pub fn new(id: EmployeeId, first_name: impl Into<String>, salary: Option<i64>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            salary,
            manager: None,
        }
    }

    pub fn from_record(record: &ValidatedRecord) -> Self {
        Self::new(record.id, record.first_name.clone(), record.salary)
    }
}

/// An employee with at least one direct report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manager {
    pub employee: Employee,
    members: Vec<EmployeeId>,
}

impl Manager {
    pub fn members(&self) -> &[EmployeeId] {
        &self.members
    }

    /// Adds `member` to the member list. An entry with the same id is
    /// replaced where it stands instead of being appended again.
    ///
    /// Returns `true` when the member was not listed before.
    pub fn register(&mut self, member: EmployeeId) -> bool {
        match self.members.iter_mut().find(|m| **m == member) {
            Some(slot) => {
                *slot = member;
                false
            }
            None => {
                self.members.push(member);
                true
            }
        }
    }

    pub fn unregister(&mut self, member: EmployeeId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| *m != member);
        self.members.len() != before
    }
}

impl From<Employee> for Manager {
    fn from(employee: Employee) -> Self {
        Self {
            employee,
            members: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Employee(Employee),
    Manager(Manager),
}

impl Node {
    pub fn base(&self) -> &Employee {
        match self {
            Node::Employee(e) => e,
            Node::Manager(m) => &m.employee,
        }
    }

    pub(crate) fn base_mut(&mut self) -> &mut Employee {
        match self {
            Node::Employee(e) => e,
            Node::Manager(m) => &mut m.employee,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.base().id
    }

    pub fn first_name(&self) -> &str {
        &self.base().first_name
    }

    pub fn salary(&self) -> Option<i64> {
        self.base().salary
    }

    pub fn manager(&self) -> Option<EmployeeId> {
        self.base().manager
    }

    pub fn has_manager(&self) -> bool {
        self.base().manager.is_some()
    }

    pub fn is_manager(&self) -> bool {
        matches!(self, Node::Manager(_))
    }

    /// Direct reports in registration order. Always empty for plain employees.
    pub fn members(&self) -> &[EmployeeId] {
        match self {
            Node::Employee(_) => &[],
            Node::Manager(m) => m.members(),
        }
    }

    pub fn as_manager(&self) -> Option<&Manager> {
        match self {
            Node::Manager(m) => Some(m),
            Node::Employee(_) => None,
        }
    }

    /// Converts into the manager variant, keeping every field and any
    /// existing member list.
    pub fn into_manager(self) -> Manager {
        match self {
            Node::Employee(e) => Manager::from(e),
            Node::Manager(m) => m,
        }
    }
}
