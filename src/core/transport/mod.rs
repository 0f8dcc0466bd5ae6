//! Transport layer for the MCP server.
//!
//! The server communicates with its host over standard input/output using the
//! MCP framing provided by rmcp; stdout carries protocol messages, so all
//! logging goes to stderr.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
