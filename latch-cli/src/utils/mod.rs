//! Utility modules for the latch CLI.

pub mod output;
