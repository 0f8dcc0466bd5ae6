//! MCP server handler and lifecycle.
//!
//! The server owns one Folk API client, shared read-only across all tool
//! routes. Concurrent tool calls never contend: the client holds no mutable
//! state past construction.

use std::sync::Arc;

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};

use super::config::Config;
use crate::domains::{folk::FolkClient, tools::build_tool_router};

/// The main MCP server handler.
///
/// Implements `ServerHandler` via the `#[tool_handler]` macro, which routes
/// `tools/list` and `tools/call` through the `tool_router` field.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let client = Arc::new(FolkClient::new(config.credentials.folk_api_key.clone()));

        Self {
            tool_router: build_tool_router::<Self>(client),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Exposes the Folk CRM REST API as tools: people and companies (full CRUD), \
                 group-scoped deals, and read-only groups and workspace users."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.credentials.folk_api_key = "test_key".to_string();
        config
    }

    #[test]
    fn test_server_reports_identity() {
        let server = McpServer::new(test_config());
        assert_eq!(server.name(), "folk-mcp-server");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_server_advertises_tools_capability() {
        let server = McpServer::new(test_config());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }
}
