//! Command implementations

pub mod lifecycle;
pub mod prompt;
pub mod status;
