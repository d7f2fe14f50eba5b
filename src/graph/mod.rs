pub mod node;
pub mod pool;
pub mod org;

pub use node::{Employee, Manager, Node};
pub use org::OrgGraph;
pub use pool::NodeMapper;
