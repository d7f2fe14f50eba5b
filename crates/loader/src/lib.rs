pub mod error;
pub mod source;
pub mod fixtures;

pub use error::{LoaderError, Result};
pub use source::{list_json_files, parse_records, read_records, resolve};
