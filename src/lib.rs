//! Folk CRM MCP Server Library
//!
//! Exposes the Folk CRM REST API as a catalog of MCP tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, and the
//!   stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **folk**: the Folk REST API client (one HTTP call per tool invocation,
//!     no caching, no retries)
//!   - **tools**: tool definitions, router, and registry
//!
//! # Example
//!
//! ```rust,no_run
//! use folk_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
