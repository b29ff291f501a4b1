//! # Latch CLI Library
//!
//! Core library modules for the latch command-line tool, providing the CLI
//! surface and output helpers around the login engine.

pub mod cli;
pub mod utils;
