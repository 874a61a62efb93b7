//! In-memory adapters for deterministic tests and local runs.

mod directory;
mod transport;

pub use directory::InMemoryDirectory;
pub use transport::{InMemoryIssueTransport, SubmittedMutation};
