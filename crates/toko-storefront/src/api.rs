//! Catalog fetch boundary.
//!
//! One HTTP GET per page load against an endpoint returning a JSON array
//! of `{id, title, price, category, image}` records. No pagination, no
//! auth, no retry; a failure degrades the grid to an error banner.

use serde::Deserialize;
use thiserror::Error;
use toko_commerce::catalog::Product;
use toko_commerce::ids::ProductId;
use toko_commerce::money::{Currency, Money};

/// Failure of the one-shot catalog fetch (network error, non-2xx status,
/// or a body that is not the expected JSON).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Wire shape of a catalog record.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: u64,
    title: String,
    price: f64,
    category: String,
    image: String,
}

impl ProductRecord {
    fn into_product(self) -> Product {
        Product::new(
            ProductId::new(self.id.to_string()),
            self.title,
            self.category,
            Money::from_decimal(self.price, Currency::USD),
            self.image,
        )
    }
}

/// Fetch the catalog once.
pub async fn fetch_catalog(url: &str) -> Result<Vec<Product>, FetchError> {
    let records: Vec<ProductRecord> = reqwest::get(url)
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(records.into_iter().map(ProductRecord::into_product).collect())
}
