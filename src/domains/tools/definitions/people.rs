//! People tools: list, get, create, update, delete.
//!
//! Create and update share one body shape. Every field is optional and only
//! caller-supplied fields reach the request body; on update, Folk replaces an
//! array field wholesale when it is present and leaves it untouched when it is
//! absent, so the absent-vs-empty distinction must survive parameter parsing.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::{ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use super::common::{CompanyRef, GroupRef, envelope, insert_field, route_for};
use crate::domains::folk::{FolkClient, PageParams};

/// Body fields accepted when creating or updating a person.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonFields {
    #[schemars(description = "First name (max 500 chars)")]
    pub first_name: Option<String>,

    #[schemars(description = "Last name (max 500 chars)")]
    pub last_name: Option<String>,

    #[schemars(description = "Full name (max 1000 chars)")]
    pub full_name: Option<String>,

    #[schemars(description = "Job title (max 500 chars)")]
    pub job_title: Option<String>,

    #[schemars(description = "Bio/summary (max 5000 chars)")]
    pub description: Option<String>,

    #[schemars(description = "Birthday in YYYY-MM-DD format")]
    pub birthday: Option<String>,

    #[schemars(description = "Email addresses (max 20, first is primary)")]
    pub emails: Option<Vec<String>>,

    #[schemars(description = "Phone numbers (max 20, first is primary)")]
    pub phones: Option<Vec<String>>,

    #[schemars(description = "Addresses (max 20, first is primary)")]
    pub addresses: Option<Vec<String>>,

    #[schemars(description = "URLs (max 20, first is primary)")]
    pub urls: Option<Vec<String>>,

    #[schemars(description = "Groups to add to (max 100, by ID)")]
    pub groups: Option<Vec<GroupRef>>,

    #[schemars(description = "Companies (max 20, by ID or name)")]
    pub companies: Option<Vec<CompanyRef>>,
}

impl PersonFields {
    /// Build the request body from supplied fields only.
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        insert_field(&mut body, "firstName", self.first_name);
        insert_field(&mut body, "lastName", self.last_name);
        insert_field(&mut body, "fullName", self.full_name);
        insert_field(&mut body, "jobTitle", self.job_title);
        insert_field(&mut body, "description", self.description);
        insert_field(&mut body, "birthday", self.birthday);
        insert_field(&mut body, "emails", self.emails);
        insert_field(&mut body, "phones", self.phones);
        insert_field(&mut body, "addresses", self.addresses);
        insert_field(&mut body, "urls", self.urls);
        insert_field(&mut body, "groups", self.groups);
        insert_field(&mut body, "companies", self.companies);
        body
    }
}

// ============================================================================
// list_people
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListPeopleParams {
    #[serde(flatten)]
    pub page: PageParams,
}

pub struct ListPeopleTool;

impl ListPeopleTool {
    pub const NAME: &'static str = "list_people";

    pub const DESCRIPTION: &'static str =
        "List people (contacts) in Folk CRM. Supports pagination.";

    pub async fn execute(params: ListPeopleParams, client: &FolkClient) -> CallToolResult {
        info!("Listing people");
        envelope(client.list_people(&params.page).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListPeopleParams>().into(),
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
// get_person
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPersonParams {
    #[schemars(description = "Person ID (e.g. per_...)")]
    pub person_id: String,
}

pub struct GetPersonTool;

impl GetPersonTool {
    pub const NAME: &'static str = "get_person";

    pub const DESCRIPTION: &'static str = "Get a single person (contact) by ID from Folk CRM.";

    pub async fn execute(params: GetPersonParams, client: &FolkClient) -> CallToolResult {
        info!("Getting person: {}", params.person_id);
        envelope(client.get_person(&params.person_id).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetPersonParams>().into(),
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
// create_person
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreatePersonParams {
    #[serde(flatten)]
    pub fields: PersonFields,
}

pub struct CreatePersonTool;

impl CreatePersonTool {
    pub const NAME: &'static str = "create_person";

    pub const DESCRIPTION: &'static str = "Create a new person (contact) in Folk CRM.";

    pub async fn execute(params: CreatePersonParams, client: &FolkClient) -> CallToolResult {
        info!("Creating person");
        envelope(client.create_person(params.fields.into_body()).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CreatePersonParams>().into(),
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
// update_person
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonParams {
    #[schemars(description = "Person ID to update (e.g. per_...)")]
    pub person_id: String,

    #[serde(flatten)]
    pub fields: PersonFields,
}

pub struct UpdatePersonTool;

impl UpdatePersonTool {
    pub const NAME: &'static str = "update_person";

    pub const DESCRIPTION: &'static str = "Update an existing person in Folk CRM. Arrays (emails, phones, groups, etc.) REPLACE existing values entirely.";

    pub async fn execute(params: UpdatePersonParams, client: &FolkClient) -> CallToolResult {
        info!("Updating person: {}", params.person_id);
        envelope(
            client
                .update_person(&params.person_id, params.fields.into_body())
                .await,
        )
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<UpdatePersonParams>().into(),
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
// delete_person
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePersonParams {
    #[schemars(description = "Person ID to delete (e.g. per_...)")]
    pub person_id: String,
}

pub struct DeletePersonTool;

impl DeletePersonTool {
    pub const NAME: &'static str = "delete_person";

    pub const DESCRIPTION: &'static str =
        "Permanently delete a person from Folk CRM. This is irreversible.";

    pub async fn execute(params: DeletePersonParams, client: &FolkClient) -> CallToolResult {
        info!("Deleting person: {}", params.person_id);
        envelope(client.delete_person(&params.person_id).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DeletePersonParams>().into(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_body_includes_only_supplied_fields() {
        let params: CreatePersonParams =
            serde_json::from_value(json!({"firstName": "Ada"})).unwrap();
        let body = params.fields.into_body();
        assert_eq!(body.len(), 1);
        assert_eq!(body.get("firstName"), Some(&json!("Ada")));
    }

    #[test]
    fn test_update_explicit_empty_array_is_sent() {
        let params: UpdatePersonParams =
            serde_json::from_value(json!({"personId": "per_1", "emails": []})).unwrap();
        assert_eq!(params.person_id, "per_1");
        let body = params.fields.into_body();
        assert_eq!(body.len(), 1);
        assert_eq!(body.get("emails"), Some(&json!([])));
    }

    #[test]
    fn test_update_omitted_array_is_absent() {
        let params: UpdatePersonParams =
            serde_json::from_value(json!({"personId": "per_1", "firstName": "Ada"})).unwrap();
        let body = params.fields.into_body();
        assert!(!body.contains_key("emails"));
        assert!(!body.contains_key("groups"));
        assert_eq!(body.get("firstName"), Some(&json!("Ada")));
    }

    #[test]
    fn test_full_body_round_trip() {
        let params: CreatePersonParams = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "jobTitle": "Analyst",
            "emails": ["ada@example.com"],
            "groups": [{"id": "grp_1"}],
            "companies": [{"name": "Analytical Engines"}]
        }))
        .unwrap();
        let body = params.fields.into_body();
        assert_eq!(body.get("groups"), Some(&json!([{"id": "grp_1"}])));
        assert_eq!(
            body.get("companies"),
            Some(&json!([{"name": "Analytical Engines"}]))
        );
        assert!(!body.contains_key("phones"));
    }

    #[test]
    fn test_list_params_flatten_pagination() {
        let params: ListPeopleParams =
            serde_json::from_value(json!({"limit": "50", "cursor": "abc"})).unwrap();
        assert_eq!(params.page.limit.as_deref(), Some("50"));
        assert_eq!(params.page.cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn test_update_requires_person_id() {
        let result: Result<UpdatePersonParams, _> =
            serde_json::from_value(json!({"firstName": "Ada"}));
        assert!(result.is_err());
    }
}
