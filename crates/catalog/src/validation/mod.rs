//! Request validation: product payloads and listing query parameters.
//!
//! Both checks collect every violation before failing, so a client sees all
//! problems with a request in a single [`common::ServiceError::Validation`].

pub mod product;
pub mod query;

pub use product::validate_product;
pub use query::{validate_query, ListQuery};
