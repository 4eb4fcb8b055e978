//! Grid filter over the loaded catalog.

use crate::catalog::Product;

/// The search text and category constraint applied to the product grid.
///
/// Title matching is case-insensitive substring, not token-based; an empty
/// text matches every title and an empty category matches every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Search text, stored lowercased.
    text: String,
    /// Exact category value ("" selects all).
    category: String,
}

impl CatalogFilter {
    /// An empty filter that matches the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the search text.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_lowercase();
    }

    /// Update the category constraint.
    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
    }

    /// The lowercased search text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The selected category value.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether a product passes both constraints. Pure.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self.category.is_empty() || product.category == self.category;
        let text_ok = self.text.is_empty() || product.title.to_lowercase().contains(&self.text);
        category_ok && text_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn shirt() -> Product {
        Product::new(
            "1",
            "Mens Casual T-Shirt",
            "men's clothing",
            Money::from_decimal(10.0, Currency::USD),
            "x",
        )
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(CatalogFilter::new().matches(&shirt()));
    }

    #[test]
    fn test_text_match_is_case_insensitive_substring() {
        let mut filter = CatalogFilter::new();
        filter.set_text("CASUAL t-");
        assert!(filter.matches(&shirt()));

        filter.set_text("formal");
        assert!(!filter.matches(&shirt()));
    }

    #[test]
    fn test_category_is_exact() {
        let mut filter = CatalogFilter::new();
        filter.set_category("men's clothing");
        assert!(filter.matches(&shirt()));

        filter.set_category("men's");
        assert!(!filter.matches(&shirt()));
    }

    #[test]
    fn test_both_constraints_must_hold() {
        let mut filter = CatalogFilter::new();
        filter.set_category("men's clothing");
        filter.set_text("shirt");
        assert!(filter.matches(&shirt()));

        filter.set_text("jacket");
        assert!(!filter.matches(&shirt()));
    }
}
