use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// A supplier the shop purchases stock from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Unique identifier (UUID)
    pub id: String,

    /// Supplier display name
    pub name: String,

    /// Contact phone number
    pub phone: Option<String>,

    /// Postal address
    pub address: Option<String>,
}

impl Supplier {
    /// Create a new supplier with validation
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::validation("Supplier name cannot be empty"));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            phone: None,
            address: None,
        })
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}
