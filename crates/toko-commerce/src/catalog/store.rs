//! Owned catalog state.

use crate::catalog::{CatalogFilter, Product};
use crate::ids::ProductId;

/// Label shown for the all-categories pseudo-option.
pub const ALL_CATEGORIES_LABEL: &str = "Semua Kategori";

/// Load state of the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogState {
    /// Initial fetch still in flight.
    #[default]
    Loading,
    /// Fetch succeeded; products are available.
    Ready,
    /// Fetch failed; the catalog stays empty and no retry is attempted.
    Unavailable,
}

/// An entry for the category dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Raw value used for filtering ("" selects every category).
    pub value: String,
    /// Display label, first letter capitalized.
    pub label: String,
}

/// The fetched product list and its load state.
///
/// Populated by exactly one fetch per page load and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    state: CatalogState,
}

impl CatalogStore {
    /// An empty catalog awaiting its fetch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the fetched records as-is and mark the catalog ready.
    pub fn load(&mut self, records: Vec<Product>) {
        self.products = records;
        self.state = CatalogState::Ready;
    }

    /// Record a failed fetch; the catalog stays empty.
    pub fn mark_unavailable(&mut self) {
        self.state = CatalogState::Unavailable;
    }

    /// Current load state.
    pub fn state(&self) -> CatalogState {
        self.state
    }

    /// All loaded products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct category values in first-seen order, preceded by the
    /// all-categories pseudo-option.
    pub fn categories(&self) -> Vec<CategoryOption> {
        let mut options = vec![CategoryOption {
            value: String::new(),
            label: ALL_CATEGORIES_LABEL.to_string(),
        }];
        for product in &self.products {
            if options.iter().any(|o| o.value == product.category) {
                continue;
            }
            options.push(CategoryOption {
                value: product.category.clone(),
                label: capitalize_first(&product.category),
            });
        }
        options
    }

    /// Products passing the filter, in original catalog order. Pure.
    pub fn filter<'a>(&'a self, filter: &CatalogFilter) -> Vec<&'a Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, title: &str, category: &str) -> Product {
        Product::new(
            id,
            title,
            category,
            Money::from_decimal(1.0, Currency::USD),
            "x",
        )
    }

    fn sample_catalog() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.load(vec![
            product("1", "Slim Fit Shirt", "men's clothing"),
            product("2", "Gold Ring", "jewelery"),
            product("3", "Rain Jacket", "men's clothing"),
            product("4", "Monitor 27in", "electronics"),
        ]);
        store
    }

    #[test]
    fn test_load_marks_ready() {
        let store = sample_catalog();
        assert_eq!(store.state(), CatalogState::Ready);
        assert_eq!(store.products().len(), 4);
    }

    #[test]
    fn test_unavailable_keeps_catalog_empty() {
        let mut store = CatalogStore::new();
        assert_eq!(store.state(), CatalogState::Loading);
        store.mark_unavailable();
        assert_eq!(store.state(), CatalogState::Unavailable);
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_categories_first_seen_order_with_all_option() {
        let options = sample_catalog().categories();
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            ["", "men's clothing", "jewelery", "electronics"]
        );
        assert_eq!(options[0].label, ALL_CATEGORIES_LABEL);
        assert_eq!(options[1].label, "Men's clothing");
    }

    #[test]
    fn test_empty_filter_returns_catalog_in_order() {
        let store = sample_catalog();
        let all = store.filter(&CatalogFilter::new());
        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let store = sample_catalog();
        let mut filter = CatalogFilter::new();
        filter.set_text("shirt");
        filter.set_category("men's clothing");

        let once = store.filter(&filter);
        let twice = store.filter(&filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_predicates_commute() {
        let store = sample_catalog();

        let mut text_only = CatalogFilter::new();
        text_only.set_text("i");
        let mut category_only = CatalogFilter::new();
        category_only.set_category("men's clothing");
        let mut both = CatalogFilter::new();
        both.set_text("i");
        both.set_category("men's clothing");

        // Applying the category constraint to the text-filtered set (and the
        // reverse) matches the combined filter.
        let text_then_category: Vec<_> = store
            .filter(&text_only)
            .into_iter()
            .filter(|p| category_only.matches(p))
            .collect();
        let category_then_text: Vec<_> = store
            .filter(&category_only)
            .into_iter()
            .filter(|p| text_only.matches(p))
            .collect();

        assert_eq!(text_then_category, category_then_text);
        assert_eq!(text_then_category, store.filter(&both));
    }

    #[test]
    fn test_lookup_by_id() {
        let store = sample_catalog();
        assert!(store.get(&ProductId::new("2")).is_some());
        assert!(store.get(&ProductId::new("99")).is_none());
    }
}
