//! Core module containing shared infrastructure components.
//!
//! Error handling, configuration, server lifecycle, and the stdio transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::StdioTransport;
