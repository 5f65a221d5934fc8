use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::Supplier;
use crate::storage::KeyValueStore;

const KEY_PREFIX: &str = "supplier:";

/// Repository for supplier master data
#[derive(Clone)]
pub struct SupplierRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SupplierRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(id: &str) -> String {
        format!("{KEY_PREFIX}{id}")
    }

    pub fn create(&self, supplier: &Supplier) -> Result<()> {
        let key = Self::key(&supplier.id);
        if self.store.get(&key)?.is_some() {
            return Err(AppError::validation(format!(
                "Supplier '{}' already exists",
                supplier.id
            )));
        }

        self.store.put(&key, serde_json::to_string(supplier)?)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Supplier>> {
        match self.store.get(&Self::key(id))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn list(&self) -> Result<Vec<Supplier>> {
        let mut suppliers = Vec::new();
        for key in self.store.keys(KEY_PREFIX)? {
            if let Some(raw) = self.store.get(&key)? {
                suppliers.push(serde_json::from_str::<Supplier>(&raw)?);
            }
        }
        suppliers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(suppliers)
    }

    pub fn update(&self, supplier: &Supplier) -> Result<()> {
        let key = Self::key(&supplier.id);
        if self.store.get(&key)?.is_none() {
            return Err(AppError::not_found(format!(
                "Supplier '{}' does not exist",
                supplier.id
            )));
        }

        self.store.put(&key, serde_json::to_string(supplier)?)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let key = Self::key(id);
        if self.store.get(&key)?.is_none() {
            return Err(AppError::not_found(format!(
                "Supplier '{}' does not exist",
                id
            )));
        }

        self.store.remove(&key)
    }
}
