//! User tools. Workspace users are read-only through the Folk API.

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

// ============================================================================
// list_users
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListUsersParams {
    #[serde(flatten)]
    pub page: PageParams,
}

pub struct ListUsersTool;

impl ListUsersTool {
    pub const NAME: &'static str = "list_users";

    pub const DESCRIPTION: &'static str = "List workspace users in Folk CRM.";

    pub async fn execute(params: ListUsersParams, client: &FolkClient) -> CallToolResult {
        info!("Listing users");
        envelope(client.list_users(&params.page).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListUsersParams>().into(),
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

// ============================================================================
// get_current_user
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetCurrentUserParams {}

pub struct GetCurrentUserTool;

impl GetCurrentUserTool {
    pub const NAME: &'static str = "get_current_user";

    pub const DESCRIPTION: &'static str = "Get the currently authenticated Folk CRM user.";

    pub async fn execute(_params: GetCurrentUserParams, client: &FolkClient) -> CallToolResult {
        info!("Getting current user");
        envelope(client.get_current_user().await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetCurrentUserParams>().into(),
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
    fn test_current_user_params_accept_empty_object() {
        let params: Result<GetCurrentUserParams, _> = serde_json::from_value(json!({}));
        assert!(params.is_ok());
    }

    #[test]
    fn test_list_users_pagination_forwarded() {
        let params: ListUsersParams = serde_json::from_value(json!({"cursor": "tok"})).unwrap();
        assert_eq!(
            params.page.to_query(),
            vec![("cursor".to_string(), "tok".to_string())]
        );
    }
}
