//! MCP server exposing the Submagic video editing API as agent tools.
//!
//! The adapter is stateless: each tool invocation validates its input,
//! performs at most one HTTP call against the remote service, and renders
//! the response (or the normalized failure) as bounded text.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod inputs;
pub mod project;
pub mod server;
