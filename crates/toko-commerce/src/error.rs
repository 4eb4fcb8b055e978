//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Lookup misses (an unknown product id on add-to-cart, an unknown line id
/// on a cart mutation) are deliberately not errors; those operations are
/// no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required buyer field is blank or no payment method is selected.
    #[error("Order incomplete: missing {0}")]
    OrderIncomplete(String),

    /// Checkout was submitted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A transfer payment method has no destination account configured.
    #[error("No destination account configured for payment method {0}")]
    UnmappedPaymentMethod(&'static str),

    /// The configuration failed startup validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
