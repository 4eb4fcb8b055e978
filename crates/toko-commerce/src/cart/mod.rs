//! Shopping cart module.
//!
//! The in-memory cart and its lines; quantities, totals, and item counts.

mod cart;

pub use cart::{Cart, CartLine};
