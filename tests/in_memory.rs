//! In-memory issue creation integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `issue_creation_tests`: Full pipeline runs against the in-memory
//!   directory and transport

mod in_memory {
    pub mod helpers;

    mod issue_creation_tests;
}
