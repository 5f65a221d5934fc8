// ProductRepository implementation
// Provides key-value CRUD operations for products plus the operator
// lookup used by the billing ledger.

use std::sync::Arc;

use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::Product;
use crate::storage::KeyValueStore;

const KEY_PREFIX: &str = "product:";

/// Repository for product master data
#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(id: &str) -> String {
        format!("{KEY_PREFIX}{id}")
    }

    /// Create a new product record. Fails if the id is already taken.
    pub fn create(&self, product: &Product) -> Result<()> {
        product.validate()?;

        let key = Self::key(&product.id);
        if self.store.get(&key)?.is_some() {
            return Err(AppError::validation(format!(
                "Product '{}' already exists",
                product.id
            )));
        }

        self.store.put(&key, serde_json::to_string(product)?)?;
        debug!(product = %product.id, name = %product.name, "product created");
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        match self.store.get(&Self::key(id))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// List all products, sorted by name.
    pub fn list(&self) -> Result<Vec<Product>> {
        let mut products = Vec::new();
        for key in self.store.keys(KEY_PREFIX)? {
            if let Some(raw) = self.store.get(&key)? {
                products.push(serde_json::from_str::<Product>(&raw)?);
            }
        }
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    /// Update an existing product in place with a single atomic write.
    pub fn update(&self, product: &Product) -> Result<()> {
        product.validate()?;

        let key = Self::key(&product.id);
        if self.store.get(&key)?.is_none() {
            return Err(AppError::not_found(format!(
                "Product '{}' does not exist",
                product.id
            )));
        }

        self.store.put(&key, serde_json::to_string(product)?)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let key = Self::key(id);
        if self.store.get(&key)?.is_none() {
            return Err(AppError::not_found(format!(
                "Product '{}' does not exist",
                id
            )));
        }

        self.store.remove(&key)
    }

    /// Resolve an operator lookup: exact id match first, then
    /// case-insensitive exact name match. No fuzzy search.
    pub fn find_by_key(&self, lookup_key: &str) -> Result<Option<Product>> {
        if let Some(product) = self.find_by_id(lookup_key)? {
            return Ok(Some(product));
        }

        let needle = lookup_key.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }

        Ok(self
            .list()?
            .into_iter()
            .find(|p| p.name.to_lowercase() == needle))
    }
}
