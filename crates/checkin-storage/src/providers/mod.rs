//! Record sink implementations.

pub mod file;
