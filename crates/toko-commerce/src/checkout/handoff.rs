//! Deep link to the external messaging channel.
//!
//! The handoff is fire-and-forget: the link is opened in a new browsing
//! context and nothing is read back from the channel.

/// WhatsApp send endpoint orders are handed to.
pub const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Build the deep link that opens WhatsApp with the order text prefilled.
pub fn handoff_url(seller_phone: &str, message: &str) -> String {
    format!(
        "{WHATSAPP_SEND_URL}?phone={seller_phone}&text={}",
        urlencoding::encode(message)
    )
}
