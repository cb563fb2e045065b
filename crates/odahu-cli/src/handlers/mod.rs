//! Command handlers.
//!
//! Handlers are thin wrappers that:
//!   1. Take the composed [`CliContext`](crate::CliContext)
//!   2. Call into the endpoint client or settings
//!   3. Format output for the terminal
//!
//! Rendering is split from printing so output can be tested directly.

pub mod config;
pub mod endpoints;
pub mod resolve;
