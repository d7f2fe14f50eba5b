// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Input record definitions.

use crate::types::id::EmployeeId;
use serde::Deserialize;
use serde_json::Value;

/// One undecoded entry of the input array.
///
/// Fields stay untyped so the validator can report exactly which one is
/// wrong. A JSON `null` and a missing key both land as `None`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub first_name: Option<Value>,
    #[serde(default)]
    pub manager: Option<Value>,
    #[serde(default)]
    pub salary: Option<Value>,
}

impl RawRecord {
    /// Decodes a single JSON object. Non-object values fail.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedRecord {
    pub id: EmployeeId,
    pub first_name: String,
    pub manager_id: Option<EmployeeId>,
    pub salary: Option<i64>,
}

impl ValidatedRecord {
    pub fn new(id: i64, first_name: &str, manager_id: Option<i64>, salary: Option<i64>) -> Self {
        Self {
            id: EmployeeId(id),
            first_name: first_name.to_string(),
            manager_id: manager_id.map(EmployeeId),
            salary,
        }
    }
}
