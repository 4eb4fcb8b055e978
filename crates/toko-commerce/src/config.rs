//! Storefront configuration.
//!
//! The seller phone, conversion rate, display formatting, and bank
//! directory are named configuration rather than inline literals, and are
//! validated once, before the controller starts.

use crate::checkout::PaymentDirectory;
use crate::error::StoreError;
use crate::money::Currency;

/// Fixed source-to-display conversion applied when a cart line is created.
pub const DEFAULT_CONVERSION_RATE: i64 = 15_000;

/// Everything the storefront needs beyond the catalog itself.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Catalog endpoint returning a JSON array of product records.
    pub catalog_url: String,
    /// WhatsApp number orders are handed to.
    pub seller_phone: String,
    /// Source-to-display conversion rate.
    pub conversion_rate: i64,
    /// Currency cart lines are priced and displayed in.
    pub display_currency: Currency,
    /// How long a toast notification stays up, in milliseconds.
    pub toast_duration_ms: u32,
    /// Title budget on a product card, in characters.
    pub grid_title_budget: usize,
    /// Title budget on a cart line, in characters.
    pub cart_title_budget: usize,
    /// Title budget in the order message, in characters.
    pub order_title_budget: usize,
    /// Transfer destination accounts per payment method.
    pub payment_accounts: PaymentDirectory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_url: "https://fakestoreapi.com/products".to_string(),
            seller_phone: "6289615170747".to_string(),
            conversion_rate: DEFAULT_CONVERSION_RATE,
            display_currency: Currency::IDR,
            toast_duration_ms: 3_000,
            grid_title_budget: 45,
            cart_title_budget: 35,
            order_title_budget: 25,
            payment_accounts: PaymentDirectory::default(),
        }
    }
}

impl StoreConfig {
    /// Validate the configuration at startup.
    ///
    /// Catches what would otherwise only surface mid-checkout: a transfer
    /// method with no account, an unusable rate, a missing seller number.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.seller_phone.trim().is_empty() {
            return Err(StoreError::InvalidConfig("seller phone is empty".to_string()));
        }
        if self.conversion_rate <= 0 {
            return Err(StoreError::InvalidConfig(format!(
                "conversion rate must be positive, got {}",
                self.conversion_rate
            )));
        }
        self.payment_accounts.validate()
    }
}
