use crate::core::{money, AppError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub shop: ShopConfig,
    pub billing: BillingConfig,
    pub stickers: StickerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopConfig {
    /// Display name stamped on receipts and stickers
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Prefix used when formatting invoice labels, e.g. "INV-"
    pub invoice_prefix: String,
    /// GST percentage suggested for new purchase lines
    pub default_gst_percent: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StickerConfig {
    /// Maximum characters of the product name printed on a sticker
    pub label_name_width: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            shop: ShopConfig {
                name: env::var("SHOP_NAME").unwrap_or_else(|_| "Weave Textiles".to_string()),
            },
            billing: BillingConfig {
                invoice_prefix: env::var("INVOICE_PREFIX").unwrap_or_else(|_| "INV-".to_string()),
                default_gst_percent: env::var("DEFAULT_GST_PERCENT")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid DEFAULT_GST_PERCENT".to_string())
                    })?,
            },
            stickers: StickerConfig {
                label_name_width: env::var("STICKER_NAME_WIDTH")
                    .unwrap_or_else(|_| "18".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid STICKER_NAME_WIDTH".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.shop.name.trim().is_empty() {
            return Err(AppError::Configuration(
                "Shop name must not be empty".to_string(),
            ));
        }

        if !money::is_valid_tax_rate(self.billing.default_gst_percent) {
            return Err(AppError::Configuration(
                "Default GST percent must be between 0 and 100".to_string(),
            ));
        }

        if self.stickers.label_name_width == 0 {
            return Err(AppError::Configuration(
                "Sticker name width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
