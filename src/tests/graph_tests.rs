// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::KernelError;
use crate::graph::node::{Employee, Manager, Node};
use crate::graph::pool::NodeMapper;
use crate::types::id::EmployeeId;
use crate::types::record::ValidatedRecord;

fn names(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|n| n.first_name().to_string()).collect()
}

#[test]
fn test_employee_has_no_members() {
    let node = Node::Employee(Employee::new(EmployeeId(1), "A", Some(10)));
    assert!(node.members().is_empty());
    assert!(!node.is_manager());
    assert!(!node.has_manager());
}

#[test]
fn test_manager_register_replaces_by_id() {
    let mut manager = Manager::from(Employee::new(EmployeeId(1), "Joy", None));
    assert!(manager.register(EmployeeId(2)));
    assert!(manager.register(EmployeeId(3)));
    assert!(!manager.register(EmployeeId(2)));

    assert_eq!(manager.members(), &[EmployeeId(2), EmployeeId(3)]);
}

#[test]
fn test_mapper_starts_empty() {
    let mapper = NodeMapper::new();
    assert!(mapper.is_empty());
    assert!(mapper.all_nodes().is_empty());
}

#[test]
fn test_resolve_employee_maps_fields() {
    let mut mapper = NodeMapper::new();
    let record = ValidatedRecord::new(1, "A", Some(2), Some(100));
    let node = mapper.resolve_employee(&record);

    assert_eq!(node.id(), record.id);
    assert_eq!(node.first_name(), "A");
    assert_eq!(node.salary(), Some(100));
    // The manager link is made by the builder, not by mapping.
    assert!(!node.has_manager());
    assert!(!node.is_manager());
}

#[test]
fn test_resolve_employee_is_cached() {
    let mut mapper = NodeMapper::new();
    let a = ValidatedRecord::new(1, "A", None, Some(100));
    mapper.resolve_employee(&a);
    assert_eq!(mapper.len(), 1);
    mapper.resolve_employee(&a);
    assert_eq!(mapper.len(), 1);

    let b = ValidatedRecord::new(2, "B", None, Some(100));
    mapper.resolve_employee(&b);
    assert_eq!(mapper.len(), 2);

    let ids: Vec<i64> = mapper.all_nodes().iter().map(|n| n.id().0).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_resolve_employee_keeps_manager_variant() {
    let mut mapper = NodeMapper::new();
    let a = ValidatedRecord::new(1, "A", None, None);
    mapper.resolve_manager(&a).unwrap();

    assert!(mapper.resolve_employee(&a).is_manager());
}

#[test]
fn test_resolve_manager_creates_and_is_idempotent() {
    let mut mapper = NodeMapper::new();
    let joy = ValidatedRecord::new(1, "Joy", None, Some(500000));

    let manager = mapper.resolve_manager(&joy).unwrap();
    assert_eq!(manager.employee.first_name, "Joy");
    assert!(manager.members().is_empty());

    let ted = ValidatedRecord::new(2, "Ted", Some(1), None);
    mapper.resolve_employee(&ted);
    mapper.set_manager(EmployeeId(2), EmployeeId(1)).unwrap();

    // A second resolve must not drop the existing members.
    let again = mapper.resolve_manager(&joy).unwrap();
    assert_eq!(again.members(), &[EmployeeId(2)]);
    assert_eq!(mapper.len(), 2);
}

#[test]
fn test_promotion_keeps_identity_and_single_registration() {
    let mut mapper = NodeMapper::new();
    let joy = ValidatedRecord::new(1, "Joy", None, Some(500000));
    let ted = ValidatedRecord::new(2, "Ted", Some(1), Some(70000));

    mapper.resolve_employee(&ted);
    mapper.resolve_manager(&joy).unwrap();
    mapper.set_manager(ted.id, joy.id).unwrap();
    assert!(!mapper.get(ted.id).unwrap().is_manager());

    // Ted gains a report and is promoted after already being listed under Joy.
    let promoted = mapper.resolve_manager(&ted).unwrap();
    assert_eq!(promoted.employee.id, EmployeeId(2));
    assert_eq!(promoted.employee.first_name, "Ted");
    assert_eq!(promoted.employee.salary, Some(70000));
    assert_eq!(promoted.employee.manager, Some(EmployeeId(1)));

    let joy_members = mapper.member_list(joy.id);
    assert_eq!(joy_members.len(), 1);
    assert!(joy_members[0].is_manager());
    assert_eq!(joy_members[0].id(), ted.id);
    assert_eq!(mapper.len(), 2);
}

#[test]
fn test_set_manager_rejects_missing_manager() {
    let mut mapper = NodeMapper::new();
    mapper.resolve_employee(&ValidatedRecord::new(1, "A", None, None));

    let err = mapper.set_manager(EmployeeId(1), EmployeeId(99)).unwrap_err();
    assert_eq!(err, KernelError::NullArgument("manager"));
    assert_eq!(err.to_string(), "manager must not be empty");
    assert!(!mapper.get(EmployeeId(1)).unwrap().has_manager());
}

#[test]
fn test_set_manager_rejects_missing_member() {
    let mut mapper = NodeMapper::new();
    mapper.resolve_manager(&ValidatedRecord::new(1, "A", None, None)).unwrap();

    let err = mapper.set_manager(EmployeeId(7), EmployeeId(1)).unwrap_err();
    assert_eq!(err, KernelError::NullArgument("member"));
}

#[test]
fn test_set_manager_requires_manager_variant() {
    let mut mapper = NodeMapper::new();
    mapper.resolve_employee(&ValidatedRecord::new(1, "A", None, None));
    mapper.resolve_employee(&ValidatedRecord::new(2, "B", None, None));

    let err = mapper.set_manager(EmployeeId(2), EmployeeId(1)).unwrap_err();
    assert_eq!(err, KernelError::NotAManager(EmployeeId(1)));
}

#[test]
fn test_member_list_sorted_by_name() {
    let mut mapper = NodeMapper::new();
    let allen = ValidatedRecord::new(1, "Allen", None, Some(100000));
    mapper.resolve_employee(&allen);
    mapper.resolve_manager(&allen).unwrap();

    let members = [
        ValidatedRecord::new(2, "Davis", Some(1), Some(50000)),
        ValidatedRecord::new(3, "Eureka", Some(1), Some(25000)),
        ValidatedRecord::new(4, "Bill", Some(1), Some(12500)),
        ValidatedRecord::new(5, "Carter", Some(1), Some(6250)),
        ValidatedRecord::new(6, "Fox", Some(1), Some(3125)),
    ];
    for m in &members {
        mapper.resolve_employee(m);
        mapper.set_manager(m.id, allen.id).unwrap();
    }

    let list = mapper.member_list(allen.id);
    assert_eq!(names(&list), vec!["Bill", "Carter", "Davis", "Eureka", "Fox"]);
    let ids: Vec<i64> = list.iter().map(|n| n.id().0).collect();
    assert_eq!(ids, vec![4, 5, 2, 3, 6]);
    assert!(list.iter().all(|n| n.manager() == Some(allen.id)));

    // Reading again without mutation gives the same order.
    assert_eq!(names(&mapper.member_list(allen.id)), names(&list));
}

#[test]
fn test_member_list_ties_keep_registration_order() {
    let mut mapper = NodeMapper::new();
    let boss = ValidatedRecord::new(1, "Boss", None, None);
    mapper.resolve_manager(&boss).unwrap();
    for id in [7, 3, 5] {
        mapper.resolve_employee(&ValidatedRecord::new(id, "Sam", Some(1), None));
        mapper.set_manager(EmployeeId(id), boss.id).unwrap();
    }

    let ids: Vec<i64> = mapper.member_list(boss.id).iter().map(|n| n.id().0).collect();
    assert_eq!(ids, vec![7, 3, 5]);
}

#[test]
fn test_set_manager_moves_member() {
    let mut mapper = NodeMapper::new();
    mapper.resolve_manager(&ValidatedRecord::new(1, "A", None, None)).unwrap();
    mapper.resolve_manager(&ValidatedRecord::new(2, "B", None, None)).unwrap();
    mapper.resolve_employee(&ValidatedRecord::new(3, "C", None, None));

    mapper.set_manager(EmployeeId(3), EmployeeId(1)).unwrap();
    mapper.set_manager(EmployeeId(3), EmployeeId(2)).unwrap();

    assert!(mapper.member_list(EmployeeId(1)).is_empty());
    assert_eq!(names(&mapper.member_list(EmployeeId(2))), vec!["C"]);
    assert_eq!(mapper.get(EmployeeId(3)).unwrap().manager(), Some(EmployeeId(2)));
}
