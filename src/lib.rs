//! Issuesmith: a guarded issue creation pipeline for remote issue trackers.
//!
//! This crate takes loosely-typed "create an issue" requests from tools and
//! command-line callers, rejects unsafe or invalid input, resolves
//! human-readable references into backend identifiers, and submits a single
//! creation mutation whose result is reduced to a small, stable projection.
//!
//! # Architecture
//!
//! Issuesmith follows hexagonal architecture principles:
//!
//! - **Domain**: Pure request, identifier and result types with no I/O
//! - **Ports**: Abstract trait interfaces for resolvers and the transport
//! - **Adapters**: Concrete implementations of ports (in-memory here)
//!
//! # Modules
//!
//! - [`issue`]: Request sanitization, reference resolution and issue creation

pub mod issue;
