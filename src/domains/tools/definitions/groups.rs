//! Group tools. Groups are read-only through the Folk API.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::{ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{envelope, route_for};
use crate::domains::folk::{FolkClient, PageParams};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListGroupsParams {
    #[serde(flatten)]
    pub page: PageParams,
}

pub struct ListGroupsTool;

impl ListGroupsTool {
    pub const NAME: &'static str = "list_groups";

    pub const DESCRIPTION: &'static str =
        "List all groups in Folk CRM. Groups cannot be created/updated/deleted via API.";

    pub async fn execute(params: ListGroupsParams, client: &FolkClient) -> CallToolResult {
        info!("Listing groups");
        envelope(client.list_groups(&params.page).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListGroupsParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(client: Arc<FolkClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route_for(Self::to_tool(), client, |params, client| async move {
            Self::execute(params, &client).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_accept_empty_object() {
        let params: ListGroupsParams = serde_json::from_value(json!({})).unwrap();
        assert!(params.page.limit.is_none());
        assert!(params.page.cursor.is_none());
    }

    #[test]
    fn test_tool_metadata() {
        let tool = ListGroupsTool::to_tool();
        assert_eq!(tool.name.as_ref(), "list_groups");
        assert!(tool.description.is_some());
    }
}
