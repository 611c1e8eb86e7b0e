// ABOUTME: Session-local task and label collections with optimistic remote sync
// ABOUTME: Every mutation applies locally first and rolls back to a snapshot on failure

pub mod error;
pub mod labels;
pub mod session;
pub mod tasks;

// Re-export main types
pub use error::{RegistryError, RegistryResult};
pub use labels::LabelRegistry;
pub use session::Session;
pub use tasks::{TaskFilter, TaskRegistry};
