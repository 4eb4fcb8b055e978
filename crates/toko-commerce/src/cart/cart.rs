//! Cart and cart line types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line in the cart, keyed by product id.
///
/// Title and image are snapshots taken when the line is created; the unit
/// price is already converted to the cart's display currency. A line's
/// quantity is at least 1 for as long as the line exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product this line holds (also the line's identity).
    pub product_id: ProductId,
    /// Title snapshot for display.
    pub title: String,
    /// Image snapshot for display.
    pub image: String,
    /// Unit price in the display currency.
    pub unit_price: Money,
    /// Number of units, >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Line subtotal (unit price x quantity).
    pub fn subtotal(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// The in-memory shopping cart.
///
/// Lines keep insertion order. At most one line exists per product id; a
/// quantity never reaches zero without the line being removed. Only a
/// completed checkout handoff empties the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// A repeat add increments the existing line instead of creating a
    /// second one. `unit_price` must already be in the cart's currency.
    pub fn add(&mut self, product: &Product, unit_price: Money) {
        debug_assert_eq!(unit_price.currency, self.currency);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.clone(),
            unit_price,
            quantity: 1,
        });
    }

    /// Increase a line's quantity by one. Unknown ids are no-ops.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == id) {
            line.quantity += 1;
            true
        } else {
            false
        }
    }

    /// Decrease a line's quantity by one, deleting the line the moment the
    /// quantity would drop to zero. Unknown ids are no-ops.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        let Some(pos) = self.lines.iter().position(|l| &l.product_id == id) else {
            return false;
        };
        if self.lines[pos].quantity <= 1 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].quantity -= 1;
        }
        true
    }

    /// Remove a line regardless of quantity. Unknown ids are no-ops.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != id);
        self.lines.len() < before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line subtotals, zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, line| {
                acc.saturating_add(&line.subtotal())
            })
    }

    /// Total number of units across all lines (for the badge), not the
    /// number of lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read-only view of the lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The cart's display currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, title: &str) -> Product {
        Product::new(
            id,
            title,
            "clothing",
            Money::from_decimal(10.0, Currency::USD),
            "x",
        )
    }

    fn idr(amount: i64) -> Money {
        Money::new(amount, Currency::IDR)
    }

    #[test]
    fn test_add_same_product_twice_merges_lines() {
        let mut cart = Cart::new(Currency::IDR);
        let shirt = product("1", "Test Shirt");
        cart.add(&shirt, idr(150_000));
        cart.add(&shirt, idr(150_000));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_item_count_sums_quantities_not_lines() {
        let mut cart = Cart::new(Currency::IDR);
        cart.add(&product("1", "Shirt"), idr(150_000));
        cart.add(&product("1", "Shirt"), idr(150_000));
        cart.add(&product("2", "Ring"), idr(80_000));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_decrement_removes_line_at_quantity_one() {
        let mut cart = Cart::new(Currency::IDR);
        let id = ProductId::new("1");
        cart.add(&product("1", "Shirt"), idr(150_000));

        assert!(cart.decrement(&id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_mutations_on_unknown_ids_are_noops() {
        let mut cart = Cart::new(Currency::IDR);
        cart.add(&product("1", "Shirt"), idr(150_000));
        let ghost = ProductId::new("99");

        assert!(!cart.increment(&ghost));
        assert!(!cart.decrement(&ghost));
        assert!(!cart.remove(&ghost));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let mut cart = Cart::new(Currency::IDR);
        let id = ProductId::new("1");
        cart.add(&product("1", "Shirt"), idr(150_000));
        cart.increment(&id);
        cart.increment(&id);

        assert!(cart.remove(&id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_matches_sum_of_subtotals() {
        let mut cart = Cart::new(Currency::IDR);
        assert_eq!(cart.total(), idr(0));

        cart.add(&product("1", "Shirt"), idr(150_000));
        cart.add(&product("1", "Shirt"), idr(150_000));
        cart.add(&product("2", "Ring"), idr(80_000));

        assert_eq!(cart.total(), idr(380_000));
    }

    #[test]
    fn test_no_line_ever_has_nonpositive_quantity() {
        let mut cart = Cart::new(Currency::IDR);
        let a = ProductId::new("1");
        let b = ProductId::new("2");
        cart.add(&product("1", "Shirt"), idr(150_000));
        cart.add(&product("2", "Ring"), idr(80_000));
        cart.increment(&a);
        cart.decrement(&a);
        cart.decrement(&a);
        cart.decrement(&b);
        cart.increment(&b);

        for line in cart.lines() {
            assert!(line.quantity >= 1);
        }
        assert_eq!(
            cart.item_count(),
            cart.lines().iter().map(|l| l.quantity).sum::<i64>()
        );
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new(Currency::IDR);
        cart.add(&product("3", "C"), idr(1));
        cart.add(&product("1", "A"), idr(1));
        cart.add(&product("2", "B"), idr(1));
        cart.add(&product("1", "A"), idr(1));

        let order: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(order, ["3", "1", "2"]);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new(Currency::IDR);
        cart.add(&product("1", "Shirt"), idr(150_000));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
