//! Payment methods and the transfer-account directory.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// How the buyer settles the order.
///
/// `Cod` (cash on delivery) needs no destination account; every other
/// method is a transfer whose account must be present in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Bca,
    Bri,
    Bni,
    Dana,
    Cod,
}

impl PaymentMethod {
    /// Every supported method, in form order.
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Bca,
        PaymentMethod::Bri,
        PaymentMethod::Bni,
        PaymentMethod::Dana,
        PaymentMethod::Cod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Bca => "BCA",
            PaymentMethod::Bri => "BRI",
            PaymentMethod::Bni => "BNI",
            PaymentMethod::Dana => "DANA",
            PaymentMethod::Cod => "COD",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "BCA" => Some(PaymentMethod::Bca),
            "BRI" => Some(PaymentMethod::Bri),
            "BNI" => Some(PaymentMethod::Bni),
            "DANA" => Some(PaymentMethod::Dana),
            "COD" => Some(PaymentMethod::Cod),
            _ => None,
        }
    }

    /// Whether this method settles in cash on delivery.
    pub fn is_cash_on_delivery(&self) -> bool {
        matches!(self, PaymentMethod::Cod)
    }

    /// Whether the buyer must transfer to a configured account.
    pub fn requires_transfer(&self) -> bool {
        !self.is_cash_on_delivery()
    }
}

/// Destination accounts per transfer method.
///
/// A fixed table; a transfer method missing from it is a configuration
/// error caught by [`PaymentDirectory::validate`] at startup, never a
/// runtime fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDirectory {
    accounts: Vec<(PaymentMethod, String)>,
}

impl PaymentDirectory {
    pub fn new(accounts: Vec<(PaymentMethod, String)>) -> Self {
        Self { accounts }
    }

    /// The account orders paid with `method` are transferred to.
    pub fn account_for(&self, method: PaymentMethod) -> Option<&str> {
        self.accounts
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, account)| account.as_str())
    }

    /// Check that every transfer method has a destination account.
    pub fn validate(&self) -> Result<(), StoreError> {
        for method in PaymentMethod::ALL {
            if method.requires_transfer() && self.account_for(method).is_none() {
                return Err(StoreError::UnmappedPaymentMethod(method.as_str()));
            }
        }
        Ok(())
    }
}

impl Default for PaymentDirectory {
    /// TokoKu's transfer directory.
    fn default() -> Self {
        Self::new(vec![
            (PaymentMethod::Bca, "123-456-7890 a.n. TokoKu".to_string()),
            (PaymentMethod::Bri, "987-654-3210 a.n. TokoKu".to_string()),
            (PaymentMethod::Bni, "456-789-1230 a.n. TokoKu".to_string()),
            (PaymentMethod::Dana, "0896-1517-0747 a.n. TokoKu".to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_string_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_str(method.as_str()), Some(method));
        }
        assert_eq!(PaymentMethod::from_str("dana"), Some(PaymentMethod::Dana));
        assert_eq!(PaymentMethod::from_str(""), None);
        assert_eq!(PaymentMethod::from_str("GOPAY"), None);
    }

    #[test]
    fn test_default_directory_is_valid() {
        assert!(PaymentDirectory::default().validate().is_ok());
    }

    #[test]
    fn test_missing_transfer_account_is_config_error() {
        let directory = PaymentDirectory::new(vec![(
            PaymentMethod::Bca,
            "123-456-7890 a.n. TokoKu".to_string(),
        )]);
        assert_eq!(
            directory.validate(),
            Err(StoreError::UnmappedPaymentMethod("BRI"))
        );
    }

    #[test]
    fn test_cod_needs_no_account() {
        let directory = PaymentDirectory::default();
        assert!(directory.account_for(PaymentMethod::Cod).is_none());
        assert!(directory.validate().is_ok());
    }
}
