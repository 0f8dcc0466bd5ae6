//! Folk REST API client.
//!
//! A thin pass-through adapter: every public method issues exactly one HTTP
//! request against `https://api.folk.app` and returns the response body as
//! JSON, untouched. There is no caching, no retry, and no pagination
//! following; cursors are forwarded verbatim.

use reqwest::{Method, StatusCode, header};
use serde_json::{Map, Value, json};
use tracing::debug;

use super::error::FolkError;
use super::query::{CompanyListQuery, PageParams};

const BASE_URL: &str = "https://api.folk.app";
const API_VERSION: &str = "2025-06-09";

/// Client for the Folk CRM REST API.
///
/// Immutable after construction; safe to share across concurrent tool calls
/// behind an `Arc` with no coordination.
#[derive(Clone)]
pub struct FolkClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for FolkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolkClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl FolkClient {
    /// Create a client against the production Folk API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(BASE_URL, api_key)
    }

    /// Create a client against an alternate base URL (used in tests).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Issue one request against the Folk API.
    ///
    /// Query pairs with empty values are never attached; empty means "not
    /// supplied", not "filter on empty". The bearer credential, pinned API
    /// version, and JSON content type go on every request without exception.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &[(String, String)],
    ) -> Result<Value, FolkError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Folk API request");

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.api_key)
            .header("X-API-Version", API_VERSION)
            .header(header::CONTENT_TYPE, "application/json");

        let pairs = attached_pairs(query);
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        interpret_response(status, text)
    }

    // --- People ---

    pub async fn list_people(&self, page: &PageParams) -> Result<Value, FolkError> {
        self.request(Method::GET, "/v1/people", None, &page.to_query())
            .await
    }

    pub async fn get_person(&self, person_id: &str) -> Result<Value, FolkError> {
        self.request(Method::GET, &format!("/v1/people/{person_id}"), None, &[])
            .await
    }

    pub async fn create_person(&self, data: Map<String, Value>) -> Result<Value, FolkError> {
        self.request(Method::POST, "/v1/people", Some(Value::Object(data)), &[])
            .await
    }

    pub async fn update_person(
        &self,
        person_id: &str,
        data: Map<String, Value>,
    ) -> Result<Value, FolkError> {
        self.request(
            Method::PATCH,
            &format!("/v1/people/{person_id}"),
            Some(Value::Object(data)),
            &[],
        )
        .await
    }

    pub async fn delete_person(&self, person_id: &str) -> Result<Value, FolkError> {
        self.request(Method::DELETE, &format!("/v1/people/{person_id}"), None, &[])
            .await
    }

    // --- Companies ---

    pub async fn list_companies(&self, query: &CompanyListQuery) -> Result<Value, FolkError> {
        self.request(Method::GET, "/v1/companies", None, &query.to_query())
            .await
    }

    pub async fn get_company(&self, company_id: &str) -> Result<Value, FolkError> {
        self.request(Method::GET, &format!("/v1/companies/{company_id}"), None, &[])
            .await
    }

    pub async fn create_company(&self, data: Map<String, Value>) -> Result<Value, FolkError> {
        self.request(Method::POST, "/v1/companies", Some(Value::Object(data)), &[])
            .await
    }

    pub async fn update_company(
        &self,
        company_id: &str,
        data: Map<String, Value>,
    ) -> Result<Value, FolkError> {
        self.request(
            Method::PATCH,
            &format!("/v1/companies/{company_id}"),
            Some(Value::Object(data)),
            &[],
        )
        .await
    }

    pub async fn delete_company(&self, company_id: &str) -> Result<Value, FolkError> {
        self.request(
            Method::DELETE,
            &format!("/v1/companies/{company_id}"),
            None,
            &[],
        )
        .await
    }

    // --- Deals (group-scoped) ---
    //
    // Deals live under a group and an object type name; both are path
    // segments, never body fields.

    pub async fn list_deals(
        &self,
        group_id: &str,
        object_type: &str,
        page: &PageParams,
    ) -> Result<Value, FolkError> {
        self.request(
            Method::GET,
            &format!("/v1/groups/{group_id}/{object_type}"),
            None,
            &page.to_query(),
        )
        .await
    }

    pub async fn get_deal(
        &self,
        group_id: &str,
        object_type: &str,
        object_id: &str,
    ) -> Result<Value, FolkError> {
        self.request(
            Method::GET,
            &format!("/v1/groups/{group_id}/{object_type}/{object_id}"),
            None,
            &[],
        )
        .await
    }

    pub async fn create_deal(
        &self,
        group_id: &str,
        object_type: &str,
        data: Map<String, Value>,
    ) -> Result<Value, FolkError> {
        self.request(
            Method::POST,
            &format!("/v1/groups/{group_id}/{object_type}"),
            Some(Value::Object(data)),
            &[],
        )
        .await
    }

    pub async fn update_deal(
        &self,
        group_id: &str,
        object_type: &str,
        object_id: &str,
        data: Map<String, Value>,
    ) -> Result<Value, FolkError> {
        self.request(
            Method::PATCH,
            &format!("/v1/groups/{group_id}/{object_type}/{object_id}"),
            Some(Value::Object(data)),
            &[],
        )
        .await
    }

    pub async fn delete_deal(
        &self,
        group_id: &str,
        object_type: &str,
        object_id: &str,
    ) -> Result<Value, FolkError> {
        self.request(
            Method::DELETE,
            &format!("/v1/groups/{group_id}/{object_type}/{object_id}"),
            None,
            &[],
        )
        .await
    }

    // --- Groups (read-only) ---

    pub async fn list_groups(&self, page: &PageParams) -> Result<Value, FolkError> {
        self.request(Method::GET, "/v1/groups", None, &page.to_query())
            .await
    }

    // --- Users (read-only) ---

    pub async fn list_users(&self, page: &PageParams) -> Result<Value, FolkError> {
        self.request(Method::GET, "/v1/users", None, &page.to_query())
            .await
    }

    pub async fn get_current_user(&self) -> Result<Value, FolkError> {
        self.request(Method::GET, "/v1/users/me", None, &[]).await
    }
}

/// Keep only query pairs with non-empty values, preserving order.
fn attached_pairs(query: &[(String, String)]) -> Vec<(String, String)> {
    query
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .cloned()
        .collect()
}

/// Map an HTTP status and body text to the tool-facing result.
///
/// 204 has no body to parse, so a `{"success": true}` value is synthesized.
fn interpret_response(status: StatusCode, text: String) -> Result<Value, FolkError> {
    if !status.is_success() {
        return Err(FolkError::Remote {
            status: status.as_u16(),
            body: text,
        });
    }

    if status == StatusCode::NO_CONTENT || text.is_empty() {
        return Ok(json!({ "success": true }));
    }

    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attached_pairs_drops_empty_values() {
        let query = vec![
            ("limit".to_string(), "20".to_string()),
            ("cursor".to_string(), String::new()),
            (
                "filter[customFieldValues.grp_1.Region][eq]".to_string(),
                "Austin".to_string(),
            ),
        ];
        let pairs = attached_pairs(&query);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "limit");
        assert_eq!(pairs[1].1, "Austin");
    }

    #[test]
    fn test_attached_pairs_preserves_order() {
        let query = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ];
        let pairs = attached_pairs(&query);
        assert_eq!(pairs[0].0, "b");
        assert_eq!(pairs[1].0, "a");
    }

    #[test]
    fn test_query_string_encoding_of_filter_keys() {
        let pairs = vec![(
            "filter[customFieldValues.grp_1.Region][eq]".to_string(),
            "Austin".to_string(),
        )];
        let encoded = serde_urlencoded::to_string(&pairs).unwrap();
        assert_eq!(
            encoded,
            "filter%5BcustomFieldValues.grp_1.Region%5D%5Beq%5D=Austin"
        );
    }

    #[test]
    fn test_interpret_success_returns_body_verbatim() {
        let value =
            interpret_response(StatusCode::OK, r#"{"data":[{"id":"per_1"}]}"#.to_string()).unwrap();
        assert_eq!(value["data"][0]["id"], "per_1");
    }

    #[test]
    fn test_interpret_no_content_synthesizes_success() {
        let value = interpret_response(StatusCode::NO_CONTENT, String::new()).unwrap();
        assert_eq!(value, json!({ "success": true }));
    }

    #[test]
    fn test_interpret_failure_carries_status_and_raw_body() {
        let err = interpret_response(
            StatusCode::NOT_FOUND,
            r#"{"message":"not found"}"#.to_string(),
        )
        .unwrap_err();
        match err {
            FolkError::Remote { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("not found"));
            }
            other => panic!("Expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_invalid_json_is_an_error() {
        let result = interpret_response(StatusCode::OK, "not json".to_string());
        assert!(matches!(result, Err(FolkError::InvalidBody(_))));
    }

    #[test]
    fn test_client_debug_redacts_api_key() {
        let client = FolkClient::new("super_secret_key");
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    // Integration tests (require network and a real key, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_list_groups_live() {
        let api_key = std::env::var("FOLK_API_KEY").expect("FOLK_API_KEY must be set");
        let client = FolkClient::new(api_key);
        let result = client.list_groups(&PageParams::default()).await;
        assert!(result.is_ok(), "Expected success but got {result:?}");
    }

    #[ignore]
    #[tokio::test]
    async fn test_get_current_user_live() {
        let api_key = std::env::var("FOLK_API_KEY").expect("FOLK_API_KEY must be set");
        let client = FolkClient::new(api_key);
        let result = client.get_current_user().await;
        assert!(result.is_ok(), "Expected success but got {result:?}");
    }
}
