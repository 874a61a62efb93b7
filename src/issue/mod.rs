//! Issue creation for a remote issue tracker.
//!
//! Takes an untrusted "create an issue" request, sanitizes it, resolves
//! team, state, assignee and project references to backend identifiers,
//! optionally applies the project's default template, sends a single
//! `issueCreate` mutation and returns a minimal projection of the result.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Request sanitization in [`sanitize`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod sanitize;
pub mod services;

#[cfg(test)]
mod tests;
