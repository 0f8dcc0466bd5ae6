//! Company tools: list, get, create, update, delete.
//!
//! `list_companies` carries the region convenience filter (requires a group
//! ID) plus general custom-field filters; both compile down to the same
//! synthesized query keys in `domains::folk::query`.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::{
    handler::server::tool::{ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use super::common::{GroupRef, envelope, insert_field, route_for};
use crate::domains::folk::{CompanyListQuery, CustomFieldFilter, FolkClient, PageParams};

/// Employee count ranges accepted by Folk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum EmployeeRange {
    #[serde(rename = "1-10")]
    Size1To10,
    #[serde(rename = "11-50")]
    Size11To50,
    #[serde(rename = "51-200")]
    Size51To200,
    #[serde(rename = "201-500")]
    Size201To500,
    #[serde(rename = "501-1000")]
    Size501To1000,
    #[serde(rename = "1001-5000")]
    Size1001To5000,
    #[serde(rename = "5001-10000")]
    Size5001To10000,
    #[serde(rename = "10000+")]
    Size10000Plus,
}

/// Body fields shared by company create and update.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFields {
    #[schemars(description = "Summary (max 5000 chars)")]
    pub description: Option<String>,

    #[schemars(description = "Industry sector")]
    pub industry: Option<String>,

    #[schemars(description = "Employee count range")]
    pub employee_range: Option<EmployeeRange>,

    #[schemars(description = "Year founded (YYYY)")]
    pub foundation_year: Option<String>,

    #[schemars(description = "Email addresses (max 20)")]
    pub emails: Option<Vec<String>>,

    #[schemars(description = "Phone numbers (max 20)")]
    pub phones: Option<Vec<String>>,

    #[schemars(description = "Addresses (max 20)")]
    pub addresses: Option<Vec<String>>,

    #[schemars(description = "URLs (max 20)")]
    pub urls: Option<Vec<String>>,

    #[schemars(description = "Groups (max 100)")]
    pub groups: Option<Vec<GroupRef>>,
}

impl CompanyFields {
    fn fill_body(self, body: &mut Map<String, Value>) {
        insert_field(body, "description", self.description);
        insert_field(body, "industry", self.industry);
        insert_field(body, "employeeRange", self.employee_range);
        insert_field(body, "foundationYear", self.foundation_year);
        insert_field(body, "emails", self.emails);
        insert_field(body, "phones", self.phones);
        insert_field(body, "addresses", self.addresses);
        insert_field(body, "urls", self.urls);
        insert_field(body, "groups", self.groups);
    }
}

// ============================================================================
// list_companies
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCompaniesParams {
    #[serde(flatten)]
    pub page: PageParams,

    #[schemars(description = "Group ID for custom field filtering (e.g. grp_...). Required when using region filter.")]
    pub group_id: Option<String>,

    #[schemars(description = "Filter by Region custom field (e.g. 'Austin', 'Chicago Area'). Requires groupId.")]
    pub region: Option<String>,

    #[schemars(description = "General custom field filters, applied in order")]
    pub custom_filters: Option<Vec<CustomFieldFilter>>,
}

impl ListCompaniesParams {
    fn into_query(self) -> CompanyListQuery {
        CompanyListQuery {
            page: self.page,
            group_id: self.group_id,
            region: self.region,
            custom_filters: self.custom_filters.unwrap_or_default(),
        }
    }
}

pub struct ListCompaniesTool;

impl ListCompaniesTool {
    pub const NAME: &'static str = "list_companies";

    pub const DESCRIPTION: &'static str = "List companies in Folk CRM. Supports pagination and filtering by region or custom fields.";

    pub async fn execute(params: ListCompaniesParams, client: &FolkClient) -> CallToolResult {
        info!("Listing companies");
        envelope(client.list_companies(&params.into_query()).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListCompaniesParams>().into(),
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
// get_company
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCompanyParams {
    #[schemars(description = "Company ID (e.g. com_...)")]
    pub company_id: String,
}

pub struct GetCompanyTool;

impl GetCompanyTool {
    pub const NAME: &'static str = "get_company";

    pub const DESCRIPTION: &'static str = "Get a single company by ID from Folk CRM.";

    pub async fn execute(params: GetCompanyParams, client: &FolkClient) -> CallToolResult {
        info!("Getting company: {}", params.company_id);
        envelope(client.get_company(&params.company_id).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetCompanyParams>().into(),
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
// create_company
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateCompanyParams {
    #[schemars(description = "Company name (required, unique across workspace, max 1000 chars)")]
    pub name: String,

    #[serde(flatten)]
    pub fields: CompanyFields,
}

impl CreateCompanyParams {
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        insert_field(&mut body, "name", Some(self.name));
        self.fields.fill_body(&mut body);
        body
    }
}

pub struct CreateCompanyTool;

impl CreateCompanyTool {
    pub const NAME: &'static str = "create_company";

    pub const DESCRIPTION: &'static str =
        "Create a new company in Folk CRM. Company names must be unique across the workspace.";

    pub async fn execute(params: CreateCompanyParams, client: &FolkClient) -> CallToolResult {
        info!("Creating company: {}", params.name);
        envelope(client.create_company(params.into_body()).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CreateCompanyParams>().into(),
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
// update_company
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyParams {
    #[schemars(description = "Company ID to update (e.g. com_...)")]
    pub company_id: String,

    #[schemars(description = "Company name (unique across workspace, max 1000 chars)")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub fields: CompanyFields,

    #[schemars(description = "Custom field values keyed by group ID, e.g. { 'grp_...': { 'Region': 'Austin' } }")]
    pub custom_field_values: Option<BTreeMap<String, Value>>,
}

impl UpdateCompanyParams {
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        insert_field(&mut body, "name", self.name);
        self.fields.fill_body(&mut body);
        insert_field(&mut body, "customFieldValues", self.custom_field_values);
        body
    }
}

pub struct UpdateCompanyTool;

impl UpdateCompanyTool {
    pub const NAME: &'static str = "update_company";

    pub const DESCRIPTION: &'static str =
        "Update an existing company in Folk CRM. Arrays REPLACE existing values entirely.";

    pub async fn execute(params: UpdateCompanyParams, client: &FolkClient) -> CallToolResult {
        info!("Updating company: {}", params.company_id);
        let company_id = params.company_id.clone();
        envelope(client.update_company(&company_id, params.into_body()).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<UpdateCompanyParams>().into(),
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
// delete_company
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCompanyParams {
    #[schemars(description = "Company ID to delete (e.g. com_...)")]
    pub company_id: String,
}

pub struct DeleteCompanyTool;

impl DeleteCompanyTool {
    pub const NAME: &'static str = "delete_company";

    pub const DESCRIPTION: &'static str = "Permanently delete a company from Folk CRM. This is irreversible and removes all associated custom field values, notes, and associations.";

    pub async fn execute(params: DeleteCompanyParams, client: &FolkClient) -> CallToolResult {
        info!("Deleting company: {}", params.company_id);
        envelope(client.delete_company(&params.company_id).await)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DeleteCompanyParams>().into(),
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
    fn test_employee_range_accepts_wire_values() {
        let range: EmployeeRange = serde_json::from_value(json!("11-50")).unwrap();
        assert_eq!(range, EmployeeRange::Size11To50);
        assert_eq!(serde_json::json!(range), json!("11-50"));

        let invalid: Result<EmployeeRange, _> = serde_json::from_value(json!("11-49"));
        assert!(invalid.is_err());
    }

    #[test]
    fn test_create_body_requires_name_only() {
        let params: CreateCompanyParams =
            serde_json::from_value(json!({"name": "Acme"})).unwrap();
        let body = params.into_body();
        assert_eq!(body.len(), 1);
        assert_eq!(body.get("name"), Some(&json!("Acme")));
    }

    #[test]
    fn test_create_body_serializes_employee_range() {
        let params: CreateCompanyParams =
            serde_json::from_value(json!({"name": "Acme", "employeeRange": "201-500"})).unwrap();
        let body = params.into_body();
        assert_eq!(body.get("employeeRange"), Some(&json!("201-500")));
    }

    #[test]
    fn test_update_body_passes_custom_field_values_through() {
        let params: UpdateCompanyParams = serde_json::from_value(json!({
            "companyId": "com_1",
            "customFieldValues": {"grp_1": {"Region": "Austin"}}
        }))
        .unwrap();
        let body = params.into_body();
        assert_eq!(body.len(), 1);
        assert_eq!(
            body.get("customFieldValues"),
            Some(&json!({"grp_1": {"Region": "Austin"}}))
        );
    }

    #[test]
    fn test_update_omitted_arrays_stay_absent() {
        let params: UpdateCompanyParams =
            serde_json::from_value(json!({"companyId": "com_1", "urls": []})).unwrap();
        let body = params.into_body();
        assert_eq!(body.get("urls"), Some(&json!([])));
        assert!(!body.contains_key("emails"));
        assert!(!body.contains_key("name"));
    }

    #[test]
    fn test_list_params_build_region_filter() {
        let params: ListCompaniesParams = serde_json::from_value(json!({
            "limit": "20",
            "groupId": "grp_1",
            "region": "Austin"
        }))
        .unwrap();
        let pairs = params.into_query().to_query();
        assert_eq!(pairs[0], ("limit".to_string(), "20".to_string()));
        assert_eq!(
            pairs[1],
            (
                "filter[customFieldValues.grp_1.Region][eq]".to_string(),
                "Austin".to_string()
            )
        );
    }

    #[test]
    fn test_list_params_accept_general_filters() {
        let params: ListCompaniesParams = serde_json::from_value(json!({
            "customFilters": [
                {"groupId": "grp_2", "field": "Tier", "operator": "eq", "value": "Gold"}
            ]
        }))
        .unwrap();
        let pairs = params.into_query().to_query();
        assert_eq!(
            pairs,
            vec![(
                "filter[customFieldValues.grp_2.Tier][eq]".to_string(),
                "Gold".to_string()
            )]
        );
    }
}
