//! Query-parameter construction for Folk list endpoints.
//!
//! Folk expresses custom-field constraints through a structured query key:
//! `filter[customFieldValues.<groupId>.<field>][<operator>]`. Keys are
//! synthesized here rather than accepted from callers directly, so the filter
//! grammar stays consistent across tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pagination parameters shared by every list endpoint.
///
/// Both values are forwarded as query parameters only when supplied; the
/// cursor is an opaque token passed back verbatim from a previous response.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PageParams {
    /// Items per page (1-100, default 20).
    #[schemars(description = "Items per page (1-100, default 20)")]
    pub limit: Option<String>,

    /// Pagination cursor from a previous response.
    #[schemars(description = "Pagination cursor from previous response")]
    pub cursor: Option<String>,
}

impl PageParams {
    /// Render as ordered query pairs, omitting anything the caller left out.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = &self.limit {
            pairs.push(("limit".to_string(), limit.clone()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor".to_string(), cursor.clone()));
        }
        pairs
    }
}

/// One custom-field constraint on a group-defined field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldFilter {
    /// Group that defines the custom field (e.g. grp_...).
    #[schemars(description = "Group ID that defines the custom field (e.g. grp_...)")]
    pub group_id: String,

    /// Custom field name, as defined in the group.
    #[schemars(description = "Custom field name (e.g. 'Region')")]
    pub field: String,

    /// Comparison operator (e.g. 'eq').
    #[schemars(description = "Comparison operator (e.g. 'eq')")]
    pub operator: String,

    /// Value to compare against.
    #[schemars(description = "Value to compare against")]
    pub value: String,
}

impl CustomFieldFilter {
    /// The synthesized query key for this filter.
    pub fn query_key(&self) -> String {
        custom_field_filter_key(&self.group_id, &self.field, &self.operator)
    }
}

/// Build a Folk custom-field filter key.
pub fn custom_field_filter_key(group_id: &str, field: &str, operator: &str) -> String {
    format!("filter[customFieldValues.{group_id}.{field}][{operator}]")
}

/// Full query shape for the company list endpoint.
///
/// `region` is sugar over the general custom-field filter mechanism: when both
/// `group_id` and `region` are present, one Region equality filter is
/// synthesized, identical to a manually supplied
/// `{group_id, "Region", "eq", region}` filter.
#[derive(Debug, Clone, Default)]
pub struct CompanyListQuery {
    pub page: PageParams,
    pub group_id: Option<String>,
    pub region: Option<String>,
    pub custom_filters: Vec<CustomFieldFilter>,
}

impl CompanyListQuery {
    /// Render as ordered query pairs: pagination first, then the region
    /// convenience filter, then the general filters in caller order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = self.page.to_query();

        if let (Some(group_id), Some(region)) = (&self.group_id, &self.region) {
            pairs.push((
                custom_field_filter_key(group_id, "Region", "eq"),
                region.clone(),
            ));
        }

        for filter in &self.custom_filters {
            pairs.push((filter.query_key(), filter.value.clone()));
        }

        pairs
    }
}
