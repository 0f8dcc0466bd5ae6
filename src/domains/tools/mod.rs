//! Tools domain module.
//!
//! The catalog of Folk CRM operations exposed over MCP.
//!
//! ## Architecture
//!
//! - `definitions/` - tool implementations, one file per entity family
//! - `router.rs` - ToolRouter builder for the stdio transport
//! - `registry.rs` - central catalog of names and metadata
//!
//! ## Adding a New Tool
//!
//! 1. Define params, `execute()`, `to_tool()`, and `create_route()` in the
//!    matching `definitions/` file
//! 2. Export it in `definitions/mod.rs`
//! 3. Add the route in `router.rs` and the entry in `registry.rs`

pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;
