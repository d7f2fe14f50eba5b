// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Pattern a `first_name` must fully match, as shown in error messages.
pub const FIRST_NAME_PATTERN: &str = "[A-Za-z]";

/// Field names as they appear in the input JSON.
pub const FIELD_ID: &str = "id";
pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_MANAGER: &str = "manager";
pub const FIELD_SALARY: &str = "salary";
