//! Adapter implementations for issue creation ports.

pub mod memory;
