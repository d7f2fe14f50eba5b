pub mod graph_tests;

use serde_json::Value;

use crate::types::record::RawRecord;

/// Decodes a `json!` array into raw records.
pub(crate) fn raw_records(value: Value) -> Vec<RawRecord> {
    serde_json::from_value(value).unwrap()
}
