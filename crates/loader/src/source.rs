//! Reading employee JSON files from a resources directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use staffgraph_kernel::RawRecord;
use tracing::debug;

use crate::error::{LoaderError, Result};

pub const JSON_EXTENSION: &str = "json";

/// Resolves `name` against `dir`. Absolute paths are returned unchanged and
/// leading separators on relative names are ignored, so `/test/a.json`
/// typed at a prompt means `<dir>/test/a.json` unless it exists as given.
pub fn resolve(dir: &Path, name: &str) -> PathBuf {
    let given = Path::new(name);
    if given.is_absolute() && given.exists() {
        return given.to_path_buf();
    }
    dir.join(name.trim_start_matches(['/', '\\']))
}

/// Parses a JSON document holding an array of employee objects.
///
/// `null` and `[]` both yield no records. Any other non-array document, or
/// an array element that is not an object, is rejected.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>> {
    let doc: Value = serde_json::from_str(text)?;
    let items = match doc {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => {
            return Err(LoaderError::InvalidFormat(format!(
                "expected an array of employees, found {}",
                kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(LoaderError::InvalidFormat(format!(
                    "entry {i} is {}, expected an object",
                    kind(&item)
                )));
            }
            Ok(RawRecord::from_value(item)?)
        })
        .collect()
}

/// Reads and parses one file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoaderError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let records = parse_records(&text)?;
    debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// `.json` files directly inside `dir`, sorted by file name.
pub fn list_json_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(LoaderError::NotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == JSON_EXTENSION) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), count = files.len(), "listed json files");
    Ok(files)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
