//! Arena-level algorithms behind the table and tree operations.

pub mod chain;
pub mod descend;
pub mod remove;
