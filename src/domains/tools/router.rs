//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! together around the shared Folk client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    CreateCompanyTool, CreateDealTool, CreatePersonTool, DeleteCompanyTool, DeleteDealTool,
    DeletePersonTool, GetCompanyTool, GetCurrentUserTool, GetDealTool, GetPersonTool,
    ListCompaniesTool, ListDealsTool, ListGroupsTool, ListPeopleTool, ListUsersTool,
    UpdateCompanyTool, UpdateDealTool, UpdatePersonTool,
};
use crate::domains::folk::FolkClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<FolkClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListPeopleTool::create_route(client.clone()))
        .with_route(GetPersonTool::create_route(client.clone()))
        .with_route(CreatePersonTool::create_route(client.clone()))
        .with_route(UpdatePersonTool::create_route(client.clone()))
        .with_route(DeletePersonTool::create_route(client.clone()))
        .with_route(ListCompaniesTool::create_route(client.clone()))
        .with_route(GetCompanyTool::create_route(client.clone()))
        .with_route(CreateCompanyTool::create_route(client.clone()))
        .with_route(UpdateCompanyTool::create_route(client.clone()))
        .with_route(DeleteCompanyTool::create_route(client.clone()))
        .with_route(ListDealsTool::create_route(client.clone()))
        .with_route(GetDealTool::create_route(client.clone()))
        .with_route(CreateDealTool::create_route(client.clone()))
        .with_route(UpdateDealTool::create_route(client.clone()))
        .with_route(DeleteDealTool::create_route(client.clone()))
        .with_route(ListGroupsTool::create_route(client.clone()))
        .with_route(ListUsersTool::create_route(client.clone()))
        .with_route(GetCurrentUserTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_client() -> Arc<FolkClient> {
        Arc::new(FolkClient::new("test_key"))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 18);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_people"));
        assert!(names.contains(&"create_person"));
        assert!(names.contains(&"update_company"));
        assert!(names.contains(&"delete_deal"));
        assert!(names.contains(&"list_groups"));
        assert!(names.contains(&"get_current_user"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Registry and router must expose the same catalog
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
