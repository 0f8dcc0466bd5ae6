//! Domains module containing business logic organized by bounded contexts.
//!
//! - `folk` - the Folk REST API client (the only outbound dependency)
//! - `tools` - the MCP tool catalog built on top of it

pub mod folk;
pub mod tools;
