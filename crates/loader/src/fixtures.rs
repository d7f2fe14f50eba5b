//! Sample input files for tests and demos.

use crate::error::Result;

use std::fs;
use std::path::{Path, PathBuf};

pub const BASIC: &str = r#"[
  {"id": 1, "first_name": "Joy", "salary": 500000},
  {"id": 2, "first_name": "Ted", "manager": 1},
  {"id": 3, "first_name": "David", "manager": 2, "salary": null},
  {"id": 4, "first_name": "Michael", "manager": 2},
  {"id": 5, "first_name": "Peter", "manager": 2, "salary": 25000}
]
"#;

pub const WRONG_TYPE: &str = r#"[
  {"id": 1, "first_name": "Joy", "salary": "five hundred"}
]
"#;

pub const NO_ID: &str = r#"[
  {"first_name": "Joy", "salary": 100}
]
"#;

pub const NO_FIRST_NAME: &str = r#"[
  {"id": 1, "salary": 100}
]
"#;

pub const DUPLICATE_ID: &str = r#"[
  {"id": 1, "first_name": "Joy"},
  {"id": 1, "first_name": "Ted"}
]
"#;

pub const MISSING_MANAGER: &str = r#"[
  {"id": 1, "first_name": "Joy"},
  {"id": 2, "first_name": "Ted", "manager": 7}
]
"#;

pub struct TestPaths {
    pub dir: PathBuf,
    pub basic: PathBuf,
    pub empty: PathBuf,
    pub wrong_type: PathBuf,
    pub no_id: PathBuf,
    pub no_first_name: PathBuf,
    pub duplicate_id: PathBuf,
    pub missing_manager: PathBuf,
}

/// Writes one file per scenario into `dir`, creating it if needed.
pub fn generate_test_scenario(dir: &Path) -> Result<TestPaths> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let write = |name: &str, body: &str| -> Result<PathBuf> {
        let path = dir.join(name);
        fs::write(&path, body)?;
        Ok(path)
    };

    Ok(TestPaths {
        dir: dir.to_path_buf(),
        basic: write("employees-test.json", BASIC)?,
        empty: write("employees-empty.json", "")?,
        wrong_type: write("employees-test-wrong-type.json", WRONG_TYPE)?,
        no_id: write("employees-test-no-id.json", NO_ID)?,
        no_first_name: write("employees-test-no-first-name.json", NO_FIRST_NAME)?,
        duplicate_id: write("employees-test-duplicate-id.json", DUPLICATE_ID)?,
        missing_manager: write("employees-test-missing-manager.json", MISSING_MANAGER)?,
    })
}
