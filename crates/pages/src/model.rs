//! Value records exchanged with the storefront during checkout
//!
//! These are immutable-after-construction fixtures, not a domain model with
//! lifecycle. Cart and order state live entirely in the application under
//! test and are only observed through rendered text.

use serde::{Deserialize, Serialize};

/// Identifies a guest checkout actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Destination for a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

/// Credit card payment instrument. Deliberately malformed variants exist in
/// the fixture catalog to probe the storefront's validation paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardPayment {
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    pub card_holder_name: String,
}

/// Payment methods offered by the checkout dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    BankTransfer,
    CashOnDelivery,
    CreditCard,
    BuyNowPayLater,
    GiftCard,
}

impl PaymentMethod {
    /// The visible option label in the payment-method dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank Transfer",
            Self::CashOnDelivery => "Cash on Delivery",
            Self::CreditCard => "Credit Card",
            Self::BuyNowPayLater => "Buy Now Pay Later",
            Self::GiftCard => "Gift Card",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_labels_match_dropdown_options() {
        assert_eq!(PaymentMethod::BankTransfer.label(), "Bank Transfer");
        assert_eq!(PaymentMethod::CreditCard.label(), "Credit Card");
    }
}
