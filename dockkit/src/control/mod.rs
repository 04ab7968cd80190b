mod error;
mod host;
mod tree;

pub use error::TreeError;
pub use host::ControlHost;
pub use tree::{Control, ControlTree};

/// Non-owning handle to a control in a host tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub usize);
