//! Product records from the remote catalog.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the fetched catalog.
///
/// Records are read-only after load; the id is unique within a fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Category the product belongs to.
    pub category: String,
    /// Unit price in the source currency.
    pub price: Money,
    /// Image URI.
    pub image: String,
}

impl Product {
    /// Create a new product record.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            price,
            image: image.into(),
        }
    }
}

/// Clip a title to `budget` characters for a display surface, appending an
/// ellipsis only when something was actually cut.
pub fn clip_title(title: &str, budget: usize) -> String {
    if title.chars().count() <= budget {
        title.to_string()
    } else {
        let mut clipped: String = title.chars().take(budget).collect();
        clipped.push_str("...");
        clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new(
            "1",
            "Test Shirt",
            "clothing",
            Money::from_decimal(10.0, Currency::USD),
            "https://example.com/shirt.png",
        );
        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.category, "clothing");
    }

    #[test]
    fn test_clip_title_short_titles_untouched() {
        assert_eq!(clip_title("Kaos Polos", 25), "Kaos Polos");
        assert_eq!(clip_title("", 25), "");
    }

    #[test]
    fn test_clip_title_long_titles_get_ellipsis() {
        let long = "Mens Casual Premium Slim Fit T-Shirts";
        assert_eq!(clip_title(long, 10), "Mens Casua...");
    }

    #[test]
    fn test_clip_title_counts_chars_not_bytes() {
        let title = "ééééé";
        assert_eq!(clip_title(title, 5), "ééééé");
        assert_eq!(clip_title(title, 3), "ééé...");
    }
}
