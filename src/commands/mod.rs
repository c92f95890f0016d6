//! Command implementations.

pub mod up;
pub mod version;
