//! Tool definitions module.
//!
//! One file per Folk entity family; each file holds the tools for that
//! family's CRUD surface. Shared envelope and body-building helpers live in
//! `common`.

pub mod common;
pub mod companies;
pub mod deals;
pub mod groups;
pub mod people;
pub mod users;

pub use companies::{
    CreateCompanyTool, DeleteCompanyTool, GetCompanyTool, ListCompaniesTool, UpdateCompanyTool,
};
pub use deals::{CreateDealTool, DeleteDealTool, GetDealTool, ListDealsTool, UpdateDealTool};
pub use groups::ListGroupsTool;
pub use people::{
    CreatePersonTool, DeletePersonTool, GetPersonTool, ListPeopleTool, UpdatePersonTool,
};
pub use users::{GetCurrentUserTool, ListUsersTool};
