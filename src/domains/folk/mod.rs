//! Folk CRM API client domain.
//!
//! This module owns the HTTP conversation with the Folk REST API:
//! URL construction, header injection, body serialization, query-string
//! assembly, and response interpretation. No business logic lives here;
//! tools in `domains::tools` decide what to send.

mod client;
mod error;
mod query;

pub use client::FolkClient;
pub use error::FolkError;
pub use query::{CompanyListQuery, CustomFieldFilter, PageParams, custom_field_filter_key};
