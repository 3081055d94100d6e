//! Command implementations for the wordbench CLI
//!
//! Each command is organized into its own module.

pub mod bench;
pub mod worker;
