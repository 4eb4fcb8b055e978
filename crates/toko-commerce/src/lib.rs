//! Storefront domain types and logic for Toko.
//!
//! This crate holds everything the browser shell does not: the fetched
//! catalog and its filter, the in-memory cart, order validation and
//! formatting, the WhatsApp handoff link, and the event-driven controller
//! that ties them together.
//!
//! - **Catalog**: fetched product records, category extraction, grid filter
//! - **Cart**: insertion-ordered lines, quantity rules, totals
//! - **Checkout**: payment methods, order message, messaging handoff
//! - **Controller**: `StoreEvent` in, `Effect`s out, no DOM anywhere
//!
//! # Example
//!
//! ```rust,ignore
//! use toko_commerce::prelude::*;
//!
//! let mut app = StoreApp::new(StoreConfig::default())?;
//! app.handle(StoreEvent::CatalogLoaded(products));
//!
//! // A click on an "add" control becomes an event; the returned effects
//! // tell the UI substrate what to do.
//! let effects = app.handle(StoreEvent::AddToCart(ProductId::new("1")));
//! assert!(effects.contains(&Effect::ToastAdded));
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod controller;

pub use config::StoreConfig;
pub use error::StoreError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        clip_title, CatalogFilter, CatalogState, CatalogStore, CategoryOption, Product,
        ALL_CATEGORIES_LABEL,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine};

    // Checkout
    pub use crate::checkout::{
        handoff_url, OrderDraft, OrderFormatter, PaymentDirectory, PaymentMethod,
    };

    // Controller
    pub use crate::controller::{Effect, Stage, StoreApp, StoreEvent};
}
