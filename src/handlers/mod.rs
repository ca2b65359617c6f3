//! MCP tool handlers for the study planner server
//!
//! Each tool family lives in its own file; the `#[mcp_server]` impl in
//! `lib.rs` only forwards to these methods.

pub mod catalog;
pub mod list;
pub mod plan;
