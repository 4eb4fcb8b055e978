//! Event-driven storefront controller.
//!
//! The UI substrate maps DOM events onto [`StoreEvent`]s and executes the
//! [`Effect`]s returned by [`StoreApp::handle`]; everything in between is
//! synchronous, single-threaded state mutation with no DOM dependency, so
//! the whole flow is testable without a browser.
//!
//! Checkout walks `Browsing -> CartOpen -> ConfirmingOrder` and collapses
//! back to `Browsing` on a confirmed handoff or to `CartOpen` on a
//! declined review. Events that do not apply in the current stage, and
//! lookups that miss, are no-ops.

use crate::cart::Cart;
use crate::catalog::{CatalogFilter, CatalogStore, CategoryOption, Product};
use crate::checkout::{handoff_url, OrderDraft, OrderFormatter, PaymentMethod};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;

/// Where the checkout flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Grid visible, cart closed.
    #[default]
    Browsing,
    /// Cart panel open over a scroll-locked page.
    CartOpen,
    /// Formatted order shown for a final review.
    ConfirmingOrder,
}

/// A UI-originated event.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The catalog fetch resolved with these records.
    CatalogLoaded(Vec<Product>),
    /// The catalog fetch failed; the grid degrades to an error banner.
    CatalogFailed,
    /// The search input changed.
    SearchChanged(String),
    /// The category select changed ("" selects all).
    CategoryChanged(String),
    /// An "add" control was clicked on a product card.
    AddToCart(ProductId),
    /// A cart line's increment control was clicked.
    Increment(ProductId),
    /// A cart line's decrement control was clicked.
    Decrement(ProductId),
    /// A cart line's remove control was clicked.
    Remove(ProductId),
    /// The cart panel was opened.
    OpenCart,
    /// The cart panel was closed.
    CloseCart,
    /// The payment select changed (may be the empty placeholder).
    PaymentMethodChanged(String),
    /// The checkout form was submitted.
    Submit(OrderDraft),
    /// The buyer confirmed the reviewed order.
    Confirm,
    /// The buyer declined the reviewed order.
    Cancel,
}

/// A side effect the UI substrate must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Re-render the product grid.
    RenderGrid,
    /// Re-render the cart panel and badge.
    RenderCart,
    /// Show the transient added-to-cart notification.
    ToastAdded,
    /// Freeze (true) or release (false) background scroll.
    ScrollLock(bool),
    /// Open the handoff URL in a new browsing context, fire-and-forget.
    OpenExternal(String),
    /// Surface a checkout validation error without leaving the form.
    FormError(StoreError),
}

/// The storefront state machine: the owned stores plus the checkout stage.
#[derive(Debug, Clone)]
pub struct StoreApp {
    config: StoreConfig,
    catalog: CatalogStore,
    cart: Cart,
    filter: CatalogFilter,
    stage: Stage,
    /// Formatted order text held between submit and confirm/cancel.
    pending_order: Option<String>,
    /// Method currently selected in the form, for the transfer hint.
    selected_method: Option<PaymentMethod>,
}

impl StoreApp {
    /// Validate the configuration and build an idle controller.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        let cart = Cart::new(config.display_currency);
        Ok(Self {
            config,
            catalog: CatalogStore::new(),
            cart,
            filter: CatalogFilter::new(),
            stage: Stage::default(),
            pending_order: None,
            selected_method: None,
        })
    }

    /// Apply one event and return the effects the UI must execute.
    pub fn handle(&mut self, event: StoreEvent) -> Vec<Effect> {
        match event {
            StoreEvent::CatalogLoaded(records) => {
                self.catalog.load(records);
                vec![Effect::RenderGrid]
            }
            StoreEvent::CatalogFailed => {
                self.catalog.mark_unavailable();
                vec![Effect::RenderGrid]
            }
            StoreEvent::SearchChanged(text) => {
                self.filter.set_text(&text);
                vec![Effect::RenderGrid]
            }
            StoreEvent::CategoryChanged(category) => {
                self.filter.set_category(&category);
                vec![Effect::RenderGrid]
            }
            StoreEvent::AddToCart(id) => self.add_to_cart(&id),
            StoreEvent::Increment(id) => {
                if self.cart.increment(&id) {
                    vec![Effect::RenderCart]
                } else {
                    Vec::new()
                }
            }
            StoreEvent::Decrement(id) => {
                if self.cart.decrement(&id) {
                    vec![Effect::RenderCart]
                } else {
                    Vec::new()
                }
            }
            StoreEvent::Remove(id) => {
                if self.cart.remove(&id) {
                    vec![Effect::RenderCart]
                } else {
                    Vec::new()
                }
            }
            StoreEvent::OpenCart => {
                if self.stage != Stage::Browsing {
                    return Vec::new();
                }
                self.stage = Stage::CartOpen;
                vec![Effect::RenderCart, Effect::ScrollLock(true)]
            }
            StoreEvent::CloseCart => {
                if self.stage != Stage::CartOpen {
                    return Vec::new();
                }
                // Nothing survives a close except the cart itself.
                self.stage = Stage::Browsing;
                self.selected_method = None;
                vec![Effect::ScrollLock(false)]
            }
            StoreEvent::PaymentMethodChanged(value) => {
                self.selected_method = PaymentMethod::from_str(&value);
                vec![Effect::RenderCart]
            }
            StoreEvent::Submit(draft) => self.submit(draft),
            StoreEvent::Confirm => self.confirm(),
            StoreEvent::Cancel => self.cancel(),
        }
    }

    fn add_to_cart(&mut self, id: &ProductId) -> Vec<Effect> {
        let Some(product) = self.catalog.get(id) else {
            return Vec::new();
        };
        let product = product.clone();
        let unit_price = product
            .price
            .convert(self.config.conversion_rate, self.config.display_currency);
        self.cart.add(&product, unit_price);
        vec![Effect::RenderCart, Effect::ToastAdded]
    }

    fn submit(&mut self, draft: OrderDraft) -> Vec<Effect> {
        if self.stage != Stage::CartOpen {
            return Vec::new();
        }
        match OrderFormatter::new(&self.config).format(&draft, &self.cart) {
            Ok(message) => {
                self.pending_order = Some(message);
                self.stage = Stage::ConfirmingOrder;
                vec![Effect::RenderCart]
            }
            Err(err) => vec![Effect::FormError(err)],
        }
    }

    fn confirm(&mut self) -> Vec<Effect> {
        if self.stage != Stage::ConfirmingOrder {
            return Vec::new();
        }
        let Some(message) = self.pending_order.take() else {
            return Vec::new();
        };
        let url = handoff_url(&self.config.seller_phone, &message);
        self.cart.clear();
        self.selected_method = None;
        self.stage = Stage::Browsing;
        vec![
            Effect::OpenExternal(url),
            Effect::RenderCart,
            Effect::ScrollLock(false),
        ]
    }

    fn cancel(&mut self) -> Vec<Effect> {
        if self.stage != Stage::ConfirmingOrder {
            return Vec::new();
        }
        self.pending_order = None;
        self.stage = Stage::CartOpen;
        Vec::new()
    }

    // ---- accessors for rendering ------------------------------------

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    /// Products passing the current filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(&self.filter)
    }

    /// Category options for the filter dropdown.
    pub fn categories(&self) -> Vec<CategoryOption> {
        self.catalog.categories()
    }

    /// The formatted order awaiting review, if any.
    pub fn pending_order(&self) -> Option<&str> {
        self.pending_order.as_deref()
    }

    /// Display price for a product card, converted like a cart line.
    pub fn display_price(&self, product: &Product) -> Money {
        product
            .price
            .convert(self.config.conversion_rate, self.config.display_currency)
    }

    /// Transfer hint for the selected method; `None` for COD or when
    /// nothing is selected.
    pub fn transfer_hint(&self) -> Option<String> {
        let method = self.selected_method?;
        if method.is_cash_on_delivery() {
            return None;
        }
        let account = self.config.payment_accounts.account_for(method)?;
        Some(format!(
            "Mohon transfer ke nomor: {account} dan kirim screenshot bukti transfer di WhatsApp."
        ))
    }
}
