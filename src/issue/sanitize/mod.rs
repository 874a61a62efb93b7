//! Request sanitization.
//!
//! Individual security and range rules plus the composite sanitizer that
//! runs them before any collaborator is called.

pub mod rules;
pub mod service;

pub use service::IssueSanitizer;
