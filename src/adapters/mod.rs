//! Adapters - Implementations of the crate's ports.

pub mod memory;
