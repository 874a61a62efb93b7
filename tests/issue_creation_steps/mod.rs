//! Step definitions for issue creation behaviour tests.

mod given;
mod then;
mod when;
pub mod world;
