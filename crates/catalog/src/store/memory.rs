//! [`MemoryStore`]: the in-process product collection.

use std::sync::Arc;

use chrono::Utc;
use common::{Product, ProductDraft};
use parking_lot::RwLock;
use uuid::Uuid;

use super::{ProductStore, StoreError};

/// Ordered, lock-guarded vector of products.
///
/// Lookups are linear scans. Cloning the store clones the handle, not the data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Vec<Product>>>,
}

impl MemoryStore {
    /// Create a new, empty [`MemoryStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `products`, keeping their order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(products)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl ProductStore for MemoryStore {
    fn list(&self) -> Vec<Product> {
        self.inner.read().clone()
    }

    fn get(&self, id: &str) -> Option<Product> {
        self.inner.read().iter().find(|p| p.id == id).cloned()
    }

    fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut products = self.inner.write();
        if products.iter().any(|p| same_name(&p.name, &draft.name)) {
            return Err(StoreError::NameTaken(draft.name));
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            in_stock: draft.in_stock,
            created_at: now,
            updated_at: now,
        };
        products.push(product.clone());
        Ok(product)
    }

    fn update(&self, id: &str, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut products = self.inner.write();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;

        if products
            .iter()
            .any(|p| p.id != id && same_name(&p.name, &draft.name))
        {
            return Err(StoreError::NameTaken(draft.name));
        }

        let product = &mut products[index];
        product.name = draft.name;
        product.description = draft.description;
        product.price = draft.price;
        product.category = draft.category;
        product.in_stock = draft.in_stock;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    fn delete(&self, id: &str) -> Result<Product, StoreError> {
        let mut products = self.inner.write();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        Ok(products.remove(index))
    }
}
