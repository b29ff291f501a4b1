//! Test utilities shared across the latch workspace
//!
//! This crate provides common testing infrastructure, currently netrc file
//! fixtures ([`NetrcFixture`]).
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod netrc;

// Re-export commonly used items
pub use netrc::NetrcFixture;
