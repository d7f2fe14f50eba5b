// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use crate::types::id::EmployeeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A required field (`id`, `first_name`) is absent or null.
    #[error("{field}: field required")]
    FieldRequired { field: &'static str },

    /// A field is present but holds the wrong JSON type.
    #[error("{field}: value is not a valid {expected}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("first_name must match {}: {value:?}", crate::config::FIRST_NAME_PATTERN)]
    InvalidNameFormat { value: String },

    #[error("found duplicate id: {0}")]
    DuplicateId(EmployeeId),

    #[error("manager not found: {0}")]
    ManagerNotFound(EmployeeId),

    /// Internal contract violation: a required argument resolved to nothing.
    #[error("{0} must not be empty")]
    NullArgument(&'static str),

    #[error("node {0} is not a manager")]
    NotAManager(EmployeeId),

    #[error("total salary overflowed")]
    SalaryOverflow,
}

pub type Result<T> = core::result::Result<T, KernelError>;
