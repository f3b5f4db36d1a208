//! Product persistence.
//!
//! Handlers only see the [`ProductStore`] trait; [`MemoryStore`] is the
//! in-process implementation. A persistent backend replaces it by implementing
//! the same trait.
//!
//! # Invariants
//!
//! - `id` is unique and never changes after `create`.
//! - `name` is unique case-insensitively across all products.
//! - `list` returns products in insertion order.

pub mod memory;
pub mod seed;

use common::{Product, ProductDraft, ServiceError};
use thiserror::Error;

pub use memory::MemoryStore;

/// Errors produced by a [`ProductStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No product has the given id.
    #[error("Product with ID {0} not found")]
    NotFound(String),

    /// Another product already uses this name (compared case-insensitively).
    #[error("product name already in use: {0}")]
    NameTaken(String),
}

/// CRUD access to the product collection.
///
/// Each mutating method performs its existence and uniqueness checks and the
/// write as one atomic step.
#[cfg_attr(test, mockall::automock)]
pub trait ProductStore: Send + Sync {
    /// Snapshot of every product, in insertion order.
    fn list(&self) -> Vec<Product>;

    /// Look up a product by id.
    fn get(&self, id: &str) -> Option<Product>;

    /// Append a new product with a fresh id and current timestamps.
    ///
    /// # Errors
    ///
    /// [`StoreError::NameTaken`] if any product already has the draft's name.
    fn create(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Replace the mutable fields of an existing product.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if `id` is absent, [`StoreError::NameTaken`]
    /// if a different product already has the draft's name.
    fn update(&self, id: &str, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Remove a product and hand it back.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if `id` is absent.
    fn delete(&self, id: &str) -> Result<Product, StoreError>;
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ServiceError::NotFound(err.to_string()),
            // The message differs between create and update, so handlers
            // normally map this themselves.
            StoreError::NameTaken(_) => {
                ServiceError::Conflict("Product with this name already exists".into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_id_in_message() {
        let err: ServiceError = StoreError::NotFound("abc".into()).into();
        assert_eq!(err.http_status(), 404);
        assert_eq!(err.to_string(), "Product with ID abc not found");
    }

    #[test]
    fn name_taken_maps_to_conflict() {
        let err: ServiceError = StoreError::NameTaken("Kettle".into()).into();
        assert_eq!(err.http_status(), 409);
    }
}
