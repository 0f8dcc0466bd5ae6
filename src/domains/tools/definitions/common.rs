//! Shared pieces for Folk tool definitions.
//!
//! Every tool funnels its outcome through [`envelope`], so the success/failure
//! shape is uniform across the whole catalog and no failure escapes a tool
//! route as an unhandled fault.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::warn;

use crate::domains::folk::{FolkClient, FolkError};

/// Reference to a group by ID.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GroupRef {
    /// Group ID (e.g. grp_...).
    pub id: String,
}

/// Reference to an existing record by ID.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecordRef {
    /// Record ID (e.g. per_... or com_...).
    pub id: String,
}

/// Reference to a company, either by ID or by name.
///
/// Folk accepts `{id}` for an existing company or `{name}` to attach (or
/// create) one by name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CompanyRef {
    ById {
        /// Company ID (e.g. com_...).
        id: String,
    },
    ByName {
        /// Company name.
        name: String,
    },
}

/// Wrap a Folk client outcome in the uniform tool result envelope.
///
/// Success becomes pretty-printed JSON text; failure becomes an error result
/// carrying the failure's message (for remote errors, the original status code
/// and raw body).
pub fn envelope(result: Result<Value, FolkError>) -> CallToolResult {
    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => failure_result(&format!("Failed to render response: {e}")),
        },
        Err(e) => failure_result(&e.to_string()),
    }
}

/// Create a failure envelope with a formatted message.
pub fn failure_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
}

/// Insert a body field only if the caller supplied it.
///
/// Explicitly supplied empty values (including `[]`) are inserted; omitted
/// fields never appear. On PATCH the remote treats a present array as full
/// replacement of the stored value, so an omitted array must never be
/// defaulted to empty.
pub fn insert_field(body: &mut Map<String, Value>, key: &str, value: Option<impl Serialize>) {
    if let Some(value) = value {
        body.insert(key.to_string(), serde_json::json!(value));
    }
}

/// Build a ToolRoute that parses parameters and runs the given handler.
///
/// One generic wrapper instead of a hand-written dispatch block per tool:
/// argument parsing failures surface as invalid-params protocol errors, and
/// everything past parsing resolves to a [`CallToolResult`] envelope.
pub fn route_for<S, P, F, Fut>(tool: Tool, client: Arc<FolkClient>, run: F) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
    F: Fn(P, Arc<FolkClient>) -> Fut + Send + Sync + Clone + 'static,
    Fut: Future<Output = CallToolResult> + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        let run = run.clone();
        async move {
            let params: P = serde_json::from_value(Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(run(params, client).await)
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_envelope_success_is_pretty_json() {
        let result = envelope(Ok(json!({"id": "per_1"})));
        assert!(!result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.contains("\"id\": \"per_1\""));
    }

    #[test]
    fn test_envelope_failure_carries_status_and_body() {
        let result = envelope(Err(FolkError::Remote {
            status: 500,
            body: "upstream broke".to_string(),
        }));
        assert!(result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("500"));
        assert!(text.contains("upstream broke"));
    }

    #[test]
    fn test_insert_field_omits_none() {
        let mut body = Map::new();
        insert_field(&mut body, "firstName", None::<String>);
        assert!(body.is_empty());
    }

    #[test]
    fn test_insert_field_keeps_explicit_empty_array() {
        let mut body = Map::new();
        insert_field(&mut body, "emails", Some(Vec::<String>::new()));
        assert_eq!(body.get("emails"), Some(&json!([])));
    }

    #[test]
    fn test_company_ref_accepts_id_or_name() {
        let by_id: CompanyRef = serde_json::from_value(json!({"id": "com_1"})).unwrap();
        assert!(matches!(by_id, CompanyRef::ById { .. }));

        let by_name: CompanyRef = serde_json::from_value(json!({"name": "Acme"})).unwrap();
        assert!(matches!(by_name, CompanyRef::ByName { .. }));

        assert_eq!(serde_json::json!(by_name), json!({"name": "Acme"}));
    }
}
