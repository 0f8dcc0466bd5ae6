//! Deal tools: list, get, create, update, delete.
//!
//! Deals are group-scoped custom objects: every operation takes a group ID and
//! an object type name as path segments ahead of the object's own ID. Neither
//! is optional and neither ever appears in a request body.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::{
    handler::server::tool::{ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use super::common::{RecordRef, envelope, insert_field, route_for};
use crate::domains::folk::{FolkClient, PageParams};

/// Body fields shared by deal create and update.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealFields {
    #[schemars(description = "Associated people (must be in same group)")]
    pub people: Option<Vec<RecordRef>>,

    #[schemars(description = "Associated companies (must be in same group)")]
    pub companies: Option<Vec<RecordRef>>,

    #[schemars(description = "Custom field values (flat key-value)")]
    pub custom_field_values: Option<BTreeMap<String, Value>>,
}

impl DealFields {
    fn fill_body(self, body: &mut Map<String, Value>) {
        insert_field(body, "people", self.people);
        insert_field(body, "companies", self.companies);
        insert_field(body, "customFieldValues", self.custom_field_values);
    }
}

// ============================================================================
// list_deals
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDealsParams {
    #[schemars(description = "Group ID (e.g. grp_...)")]
    pub group_id: String,

    #[schemars(description = "Object type name (e.g. 'Deals')")]
    pub object_type: String,

    #[serde(flatten)]
    pub page: PageParams,
}

pub struct ListDealsTool;

impl ListDealsTool {
    pub const NAME: &'static str = "list_deals";

    pub const DESCRIPTION: &'static str =
        "List deals in a Folk CRM group. Deals are scoped to a group and object type.";

    pub async fn execute(params: ListDealsParams, client: &FolkClient) -> CallToolResult {
        info!("Listing deals in group: {}", params.group_id);
        envelope(
            client
                .list_deals(&params.group_id, &params.object_type, &params.page)
                .await,
        )
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListDealsParams>().into(),
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
// get_deal
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetDealParams {
    #[schemars(description = "Group ID (e.g. grp_...)")]
    pub group_id: String,

    #[schemars(description = "Object type name (e.g. 'Deals')")]
    pub object_type: String,

    #[schemars(description = "Deal/object ID (e.g. obj_...)")]
    pub object_id: String,
}

pub struct GetDealTool;

impl GetDealTool {
    pub const NAME: &'static str = "get_deal";

    pub const DESCRIPTION: &'static str = "Get a single deal by ID from Folk CRM.";

    pub async fn execute(params: GetDealParams, client: &FolkClient) -> CallToolResult {
        info!("Getting deal: {}", params.object_id);
        envelope(
            client
                .get_deal(&params.group_id, &params.object_type, &params.object_id)
                .await,
        )
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetDealParams>().into(),
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
// create_deal
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealParams {
    #[schemars(description = "Group ID (e.g. grp_...)")]
    pub group_id: String,

    #[schemars(description = "Object type name (e.g. 'Deals')")]
    pub object_type: String,

    #[schemars(description = "Deal name (max 1000 chars)")]
    pub name: String,

    #[serde(flatten)]
    pub fields: DealFields,
}

impl CreateDealParams {
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        insert_field(&mut body, "name", Some(self.name));
        self.fields.fill_body(&mut body);
        body
    }
}

pub struct CreateDealTool;

impl CreateDealTool {
    pub const NAME: &'static str = "create_deal";

    pub const DESCRIPTION: &'static str = "Create a new deal in a Folk CRM group.";

    pub async fn execute(params: CreateDealParams, client: &FolkClient) -> CallToolResult {
        info!("Creating deal in group: {}", params.group_id);
        let group_id = params.group_id.clone();
        let object_type = params.object_type.clone();
        envelope(
            client
                .create_deal(&group_id, &object_type, params.into_body())
                .await,
        )
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CreateDealParams>().into(),
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
// update_deal
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDealParams {
    #[schemars(description = "Group ID (e.g. grp_...)")]
    pub group_id: String,

    #[schemars(description = "Object type name (e.g. 'Deals')")]
    pub object_type: String,

    #[schemars(description = "Deal/object ID to update (e.g. obj_...)")]
    pub object_id: String,

    #[schemars(description = "Deal name (max 1000 chars)")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub fields: DealFields,
}

impl UpdateDealParams {
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        insert_field(&mut body, "name", self.name);
        self.fields.fill_body(&mut body);
        body
    }
}

pub struct UpdateDealTool;

impl UpdateDealTool {
    pub const NAME: &'static str = "update_deal";

    pub const DESCRIPTION: &'static str =
        "Update an existing deal in Folk CRM. Arrays REPLACE existing values entirely.";

    pub async fn execute(params: UpdateDealParams, client: &FolkClient) -> CallToolResult {
        info!("Updating deal: {}", params.object_id);
        let group_id = params.group_id.clone();
        let object_type = params.object_type.clone();
        let object_id = params.object_id.clone();
        envelope(
            client
                .update_deal(&group_id, &object_type, &object_id, params.into_body())
                .await,
        )
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<UpdateDealParams>().into(),
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
// delete_deal
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDealParams {
    #[schemars(description = "Group ID (e.g. grp_...)")]
    pub group_id: String,

    #[schemars(description = "Object type name (e.g. 'Deals')")]
    pub object_type: String,

    #[schemars(description = "Deal/object ID to delete (e.g. obj_...)")]
    pub object_id: String,
}

pub struct DeleteDealTool;

impl DeleteDealTool {
    pub const NAME: &'static str = "delete_deal";

    pub const DESCRIPTION: &'static str =
        "Permanently delete a deal from Folk CRM. This is irreversible.";

    pub async fn execute(params: DeleteDealParams, client: &FolkClient) -> CallToolResult {
        info!("Deleting deal: {}", params.object_id);
        envelope(
            client
                .delete_deal(&params.group_id, &params.object_type, &params.object_id)
                .await,
        )
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DeleteDealParams>().into(),
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
// Tests
// ============================================================================
