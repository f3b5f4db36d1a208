//! Common types, protocol definitions, and errors shared across the product catalog crates.

pub mod error;
pub mod product;
pub mod protocol;

pub use error::ServiceError;
pub use product::{Category, Product, ProductDraft};
