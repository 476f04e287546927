//! Shared test utilities used across bmssp crates.

pub mod generate;
pub mod oracle;
pub mod pbt;
