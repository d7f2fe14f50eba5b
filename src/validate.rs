// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record validation: raw JSON fields into typed records.

use serde_json::Value;

use crate::config::{FIELD_FIRST_NAME, FIELD_ID, FIELD_MANAGER, FIELD_SALARY};
use crate::error::{KernelError, Result};
use crate::types::id::EmployeeId;
use crate::types::record::{RawRecord, ValidatedRecord};

/// Validates one raw record. Fields are checked in declaration order and the
/// first failure is returned.
pub fn validate_record(raw: &RawRecord) -> Result<ValidatedRecord> {
    let id = required_int(FIELD_ID, raw.id.as_ref())?;
    let first_name = first_name(raw.first_name.as_ref())?;
    let manager_id = optional_int(FIELD_MANAGER, raw.manager.as_ref())?;
    let salary = optional_int(FIELD_SALARY, raw.salary.as_ref())?;

    Ok(ValidatedRecord {
        id: EmployeeId(id),
        first_name,
        manager_id: manager_id.map(EmployeeId),
        salary,
    })
}

/// Validates a whole batch, stopping at the first bad record.
pub fn validate_records(raw: &[RawRecord]) -> Result<Vec<ValidatedRecord>> {
    raw.iter().map(validate_record).collect()
}

/// True when `name` is one or more ASCII letters and nothing else.
pub fn is_valid_first_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// JSON integers, or strings that parse fully as one (`"42"`). Floats,
/// booleans and non-numeric strings are rejected.
fn as_int(field: &'static str, value: &Value) -> Result<i64> {
    let parsed = match value {
        Value::String(s) => s.parse::<i64>().ok(),
        other => other.as_i64(),
    };
    parsed.ok_or(KernelError::FieldType {
        field,
        expected: "integer",
    })
}

fn required_int(field: &'static str, value: Option<&Value>) -> Result<i64> {
    let value = present(value).ok_or(KernelError::FieldRequired { field })?;
    as_int(field, value)
}

fn optional_int(field: &'static str, value: Option<&Value>) -> Result<Option<i64>> {
    present(value).map(|v| as_int(field, v)).transpose()
}

fn first_name(value: Option<&Value>) -> Result<String> {
    let value = present(value).ok_or(KernelError::FieldRequired {
        field: FIELD_FIRST_NAME,
    })?;
    let name = value.as_str().ok_or(KernelError::FieldType {
        field: FIELD_FIRST_NAME,
        expected: "string",
    })?;

    if !is_valid_first_name(name) {
        return Err(KernelError::InvalidNameFormat {
            value: name.to_string(),
        });
    }
    Ok(name.to_string())
}
