//! Tool registry - the catalog of all Folk tools.
//!
//! Single source of truth for tool names and metadata. The router builds its
//! routes from the same definitions; a test in `router.rs` keeps the two in
//! agreement.

use rmcp::model::Tool;

use super::definitions::{
    CreateCompanyTool, CreateDealTool, CreatePersonTool, DeleteCompanyTool, DeleteDealTool,
    DeletePersonTool, GetCompanyTool, GetCurrentUserTool, GetDealTool, GetPersonTool,
    ListCompaniesTool, ListDealsTool, ListGroupsTool, ListPeopleTool, ListUsersTool,
    UpdateCompanyTool, UpdateDealTool, UpdatePersonTool,
};

/// Tool registry - lists every tool the server exposes.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            ListPeopleTool::NAME,
            GetPersonTool::NAME,
            CreatePersonTool::NAME,
            UpdatePersonTool::NAME,
            DeletePersonTool::NAME,
            ListCompaniesTool::NAME,
            GetCompanyTool::NAME,
            CreateCompanyTool::NAME,
            UpdateCompanyTool::NAME,
            DeleteCompanyTool::NAME,
            ListDealsTool::NAME,
            GetDealTool::NAME,
            CreateDealTool::NAME,
            UpdateDealTool::NAME,
            DeleteDealTool::NAME,
            ListGroupsTool::NAME,
            ListUsersTool::NAME,
            GetCurrentUserTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn all_tools() -> Vec<Tool> {
        vec![
            ListPeopleTool::to_tool(),
            GetPersonTool::to_tool(),
            CreatePersonTool::to_tool(),
            UpdatePersonTool::to_tool(),
            DeletePersonTool::to_tool(),
            ListCompaniesTool::to_tool(),
            GetCompanyTool::to_tool(),
            CreateCompanyTool::to_tool(),
            UpdateCompanyTool::to_tool(),
            DeleteCompanyTool::to_tool(),
            ListDealsTool::to_tool(),
            GetDealTool::to_tool(),
            CreateDealTool::to_tool(),
            UpdateDealTool::to_tool(),
            DeleteDealTool::to_tool(),
            ListGroupsTool::to_tool(),
            ListUsersTool::to_tool(),
            GetCurrentUserTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_all_crud_families() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 18);
        for family in ["person", "company", "deal"] {
            assert!(
                names
                    .iter()
                    .any(|n| n.starts_with("get_") && n.contains(family))
            );
        }
        assert!(names.contains(&"list_groups"));
        assert!(names.contains(&"list_users"));
        assert!(names.contains(&"get_current_user"));
    }

    #[test]
    fn test_tool_names_are_unique() {
        let names = ToolRegistry::tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_all_tools_match_names() {
        let names = ToolRegistry::tool_names();
        let tools = ToolRegistry::all_tools();
        assert_eq!(tools.len(), names.len());
        for (tool, name) in tools.iter().zip(names) {
            assert_eq!(tool.name.as_ref(), name);
            assert!(tool.description.is_some());
        }
    }
}
