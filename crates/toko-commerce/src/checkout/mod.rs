//! Checkout module.
//!
//! Payment methods and their account directory, order draft validation,
//! message formatting, and the messaging-channel handoff.

mod handoff;
mod order;
mod payment;

pub use handoff::{handoff_url, WHATSAPP_SEND_URL};
pub use order::{OrderDraft, OrderFormatter};
pub use payment::{PaymentDirectory, PaymentMethod};
