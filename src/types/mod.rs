pub mod id;
pub mod record;

pub use id::EmployeeId;
pub use record::{RawRecord, ValidatedRecord};
