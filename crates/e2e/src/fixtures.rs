//! Static test-data catalog
//!
//! Constructor functions return a fresh owned value on every call, so
//! scenarios can never alias or mutate a shared fixture - the catalog is
//! effectively read-only even across concurrently running sessions.

pub use toolshop_pages::messages;

pub mod guests {
    use toolshop_pages::model::GuestUser;

    pub fn john_doe() -> GuestUser {
        GuestUser {
            email: "test@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    pub fn jane_smith() -> GuestUser {
        GuestUser {
            email: "guest@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
        }
    }

    pub fn test_user() -> GuestUser {
        GuestUser {
            email: "testuser@example.com".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
        }
    }
}

pub mod addresses {
    use toolshop_pages::model::BillingAddress;

    pub fn new_york() -> BillingAddress {
        BillingAddress {
            street: "123 Main St".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            country: "United States".to_string(),
            postal_code: "10001".to_string(),
        }
    }

    pub fn los_angeles() -> BillingAddress {
        BillingAddress {
            street: "456 Oak Ave".to_string(),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            country: "United States".to_string(),
            postal_code: "90001".to_string(),
        }
    }

    pub fn test_city() -> BillingAddress {
        BillingAddress {
            street: "123 Test St".to_string(),
            city: "Test City".to_string(),
            state: "TS".to_string(),
            country: "Test Country".to_string(),
            postal_code: "12345".to_string(),
        }
    }
}

pub mod cards {
    use toolshop_pages::model::CreditCardPayment;

    pub fn visa() -> CreditCardPayment {
        CreditCardPayment {
            card_number: "4111-1111-1111-1111".to_string(),
            expiration_date: "12/2025".to_string(),
            cvv: "123".to_string(),
            card_holder_name: "John Doe".to_string(),
        }
    }

    pub fn mastercard() -> CreditCardPayment {
        CreditCardPayment {
            card_number: "5555-5555-5555-4444".to_string(),
            expiration_date: "06/2026".to_string(),
            cvv: "456".to_string(),
            card_holder_name: "Jane Smith".to_string(),
        }
    }

    pub fn amex() -> CreditCardPayment {
        CreditCardPayment {
            card_number: "3782-822463-10005".to_string(),
            expiration_date: "03/2027".to_string(),
            cvv: "1234".to_string(),
            card_holder_name: "Test User".to_string(),
        }
    }
}

/// Deliberately malformed cards that probe the storefront's validation.
pub mod invalid_cards {
    use toolshop_pages::model::CreditCardPayment;

    /// Month 13 does not exist.
    pub fn invalid_month() -> CreditCardPayment {
        CreditCardPayment {
            card_number: "4111-1111-1111-1111".to_string(),
            expiration_date: "13/25".to_string(),
            cvv: "123".to_string(),
            card_holder_name: "Test User".to_string(),
        }
    }

    /// Expiration in the past.
    pub fn expired() -> CreditCardPayment {
        CreditCardPayment {
            card_number: "4111-1111-1111-1111".to_string(),
            expiration_date: "12/2020".to_string(),
            cvv: "123".to_string(),
            card_holder_name: "Test User".to_string(),
        }
    }

    /// CVV one digit short.
    pub fn short_cvv() -> CreditCardPayment {
        CreditCardPayment {
            card_number: "4111-1111-1111-1111".to_string(),
            expiration_date: "12/2025".to_string(),
            cvv: "12".to_string(),
            card_holder_name: "Test User".to_string(),
        }
    }

    /// Two-digit year where the storefront expects MM/YYYY.
    pub fn two_digit_year() -> CreditCardPayment {
        CreditCardPayment {
            card_number: "4111-1111-1111-1111".to_string(),
            expiration_date: "12/25".to_string(),
            cvv: "123".to_string(),
            card_holder_name: "Test User".to_string(),
        }
    }
}

/// 0-based positions in the home-page grid. Positional references into an
/// externally rendered list - fragile by construction, not durable ids.
pub mod products {
    pub const COMBINATION_PLIERS: usize = 0;
    pub const PLIERS: usize = 1;
    pub const BOLT_CUTTERS: usize = 2;
    pub const LONG_NOSE_PLIERS: usize = 3;
    pub const SLIP_JOINT_PLIERS: usize = 4;
    pub const CLAW_HAMMER_SHOCK_REDUCTION: usize = 5;
    pub const HAMMER: usize = 6;
    pub const CLAW_HAMMER: usize = 7;
    pub const THOR_HAMMER: usize = 8;

    pub const COMBINATION_PLIERS_NAME: &str = "Combination Pliers";
    pub const PLIERS_NAME: &str = "Pliers";
    pub const HAMMER_NAME: &str = "Hammer";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_return_equal_but_independent_values() {
        let mut first = guests::john_doe();
        let second = guests::john_doe();
        assert_eq!(first, second);

        // Mutating one call's value must not leak into the next.
        first.email.push_str(".mutated");
        assert_ne!(first, guests::john_doe());
    }

    #[test]
    fn invalid_month_fixture_is_out_of_range() {
        let card = invalid_cards::invalid_month();
        let month = card
            .expiration_date
            .split('/')
            .next()
            .and_then(|m| m.parse::<u32>().ok());
        assert_eq!(month, Some(13));
    }

    #[test]
    fn short_cvv_fixture_is_short() {
        assert_eq!(invalid_cards::short_cvv().cvv.len(), 2);
    }

    #[test]
    fn valid_cards_use_mm_yyyy_expirations() {
        for card in [cards::visa(), cards::mastercard(), cards::amex()] {
            let year = card.expiration_date.split('/').nth(1).map(str::len);
            assert_eq!(year, Some(4), "{}", card.expiration_date);
        }
    }

    #[test]
    fn t1_products_span_the_grid() {
        assert_eq!(products::COMBINATION_PLIERS, 0);
        assert_eq!(products::PLIERS, 1);
        assert_eq!(products::HAMMER, 6);
    }
}
