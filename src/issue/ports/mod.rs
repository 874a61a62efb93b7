//! Port contracts for issue creation.
//!
//! Ports define infrastructure-agnostic interfaces for the collaborators the
//! pipeline calls: identifier lookup, project template lookup, and the
//! mutation transport.

pub mod resolver;
pub mod template;
pub mod transport;

pub use resolver::{IdentifierResolver, ReferenceKind, ResolutionError, ResolutionResult};
pub use template::{TemplateResolutionError, TemplateResolutionResult, TemplateResolver};
pub use transport::{MutationTransport, RawMutationResult, TransportError, TransportResult};

