//! Order draft validation and the outgoing order message.

use crate::cart::Cart;
use crate::catalog::clip_title;
use crate::checkout::PaymentMethod;
use crate::config::StoreConfig;
use crate::error::StoreError;

/// Buyer-supplied checkout fields.
///
/// Exists only while checkout runs; dropped after formatting or on
/// cancellation. Free-text fields are stored trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub method: Option<PaymentMethod>,
}

impl OrderDraft {
    /// Build a draft from raw form values.
    ///
    /// An unknown method value counts as unselected.
    pub fn from_form(name: &str, address: &str, phone: &str, method: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            address: address.trim().to_string(),
            phone: phone.trim().to_string(),
            method: PaymentMethod::from_str(method),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.address.is_empty() {
            missing.push("address");
        }
        if self.phone.is_empty() {
            missing.push("phone");
        }
        if self.method.is_none() {
            missing.push("payment method");
        }
        missing
    }
}

/// Renders an order draft plus a cart snapshot into the text handed to the
/// messaging channel.
#[derive(Debug, Clone, Copy)]
pub struct OrderFormatter<'a> {
    config: &'a StoreConfig,
}

impl<'a> OrderFormatter<'a> {
    pub fn new(config: &'a StoreConfig) -> Self {
        Self { config }
    }

    /// Validate the draft and produce the order text.
    ///
    /// Fails when any required field is blank, no method is selected, or
    /// the cart is empty. The caller reports the error and stays on the
    /// checkout form; no store is altered.
    pub fn format(&self, draft: &OrderDraft, cart: &Cart) -> Result<String, StoreError> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(StoreError::OrderIncomplete(missing.join(", ")));
        }
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        let method = draft
            .method
            .ok_or_else(|| StoreError::OrderIncomplete("payment method".to_string()))?;

        let mut text = format!(
            "*PESANAN BARU*\nNama: {}\nAlamat: {}\nNo. HP: {}\nMetode: {}\n\n*Rincian Produk:*\n",
            draft.name,
            draft.address,
            draft.phone,
            method.as_str(),
        );
        for (index, line) in cart.lines().iter().enumerate() {
            text.push_str(&format!(
                "{}. {} ({}x) - {}\n",
                index + 1,
                clip_title(&line.title, self.config.order_title_budget),
                line.quantity,
                line.subtotal().display(),
            ));
        }
        text.push_str(&format!("\n*Total:* {}\n", cart.total().display()));

        if method.requires_transfer() {
            let account = self
                .config
                .payment_accounts
                .account_for(method)
                .ok_or(StoreError::UnmappedPaymentMethod(method.as_str()))?;
            text.push_str(&format!(
                "\nMohon transfer ke nomor: {account}\nSetelah transfer, screenshot dan kirim via WhatsApp.\n"
            ));
        }
        text.push_str("\nTerima kasih \u{1f64f}");
        Ok(text)
    }
}
