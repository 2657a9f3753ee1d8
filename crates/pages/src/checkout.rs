//! Multi-step checkout: cart review, guest sign-in, billing address, payment
//!
//! The storefront's checkout is four forward-only phases, each advanced by
//! an explicit proceed action. The phases are modeled as a typestate:
//! `Checkout<Cart> -> Checkout<Guest> -> Checkout<Billing> ->
//! Checkout<Payment>`. Each transition consumes the previous phase value,
//! so out-of-order calls are rejected at compile time instead of relying on
//! the external page to refuse them. There is no retry and no rollback; a
//! failed fill or click raises to the caller.

use std::marker::PhantomData;
use std::time::Duration;

use thirtyfour::By;

use crate::error::PageResult;
use crate::locator::{self, Locator};
use crate::messages;
use crate::model::{BillingAddress, CreditCardPayment, GuestUser, PaymentMethod};
use crate::page::PageContext;

// Cart step
const PROCEED_FROM_CART: Locator = Locator::DataTest("proceed-1");
const CART_ROWS: Locator = Locator::Css("tbody tr");

// Guest sign-in step
const GUEST_TAB: Locator = Locator::Role {
    role: "tab",
    name: "Continue as Guest",
};
const GUEST_EMAIL: Locator = Locator::DataTest("guest-email");
const GUEST_FIRST_NAME: Locator = Locator::DataTest("guest-first-name");
const GUEST_LAST_NAME: Locator = Locator::DataTest("guest-last-name");
const GUEST_SUBMIT: Locator = Locator::DataTest("guest-submit");
const PROCEED_FROM_GUEST: Locator = Locator::DataTest("proceed-2-guest");

// Billing address step
const STREET: Locator = Locator::DataTest("street");
const CITY: Locator = Locator::DataTest("city");
const STATE: Locator = Locator::DataTest("state");
const COUNTRY: Locator = Locator::DataTest("country");
const POSTAL_CODE: Locator = Locator::DataTest("postal_code");
const PROCEED_FROM_BILLING: Locator = Locator::DataTest("proceed-3");

// Payment step
const PAYMENT_METHOD: Locator = Locator::DataTest("payment-method");
const CARD_NUMBER: Locator = Locator::DataTest("credit_card_number");
const EXPIRATION_DATE: Locator = Locator::DataTest("expiration_date");
const CVV: Locator = Locator::DataTest("cvv");
const CARD_HOLDER: Locator = Locator::DataTest("card_holder_name");
const FINISH: Locator = Locator::DataTest("finish");

const SUCCESS_WAIT: Duration = Duration::from_secs(10);
const REJECTION_WAIT: Duration = Duration::from_secs(2);

/// Cart review phase marker.
pub struct Cart;
/// Guest sign-in phase marker.
pub struct Guest;
/// Billing address phase marker.
pub struct Billing;
/// Payment phase marker.
pub struct Payment;

/// The checkout flow at a given phase.
pub struct Checkout<Phase> {
    ctx: PageContext,
    _phase: PhantomData<Phase>,
}

fn at<Phase>(ctx: PageContext) -> Checkout<Phase> {
    Checkout {
        ctx,
        _phase: PhantomData,
    }
}

/// Cart table rows minus the structural totals row; zero rows stays zero.
pub fn items_in_table(rows: usize) -> usize {
    rows.saturating_sub(1)
}

impl Checkout<Cart> {
    /// Attach to the checkout flow at the cart review step, reached via
    /// [`crate::HomePage::go_to_cart`].
    pub fn at_cart(ctx: PageContext) -> Self {
        at(ctx)
    }

    /// Number of items in the cart table. The table reserves one row for
    /// the totals line; callers must not re-derive that subtraction.
    pub async fn item_count(&self) -> PageResult<usize> {
        let rows = self.ctx.interactor().count_of(CART_ROWS.by()).await?;
        Ok(items_in_table(rows))
    }

    /// Rendered cart total, e.g. "$48.41".
    pub async fn cart_total(&self) -> PageResult<String> {
        let by = By::XPath("//tr[td[contains(normalize-space(.),'Total')]]/td[last()]");
        self.ctx.interactor().text_of(by).await
    }

    /// Advance to the guest sign-in step.
    pub async fn proceed(self) -> PageResult<Checkout<Guest>> {
        self.ctx.interactor().click(PROCEED_FROM_CART.by()).await?;
        self.ctx.wait_for_page_load().await?;
        Ok(at(self.ctx))
    }
}

impl Checkout<Guest> {
    /// Fill and submit the guest form, then advance to billing.
    pub async fn continue_as_guest(self, guest: &GuestUser) -> PageResult<Checkout<Billing>> {
        let interactor = self.ctx.interactor();
        interactor.click(GUEST_TAB.by()).await?;
        interactor.fill(GUEST_EMAIL.by(), &guest.email).await?;
        interactor.fill(GUEST_FIRST_NAME.by(), &guest.first_name).await?;
        interactor.fill(GUEST_LAST_NAME.by(), &guest.last_name).await?;
        interactor.click(GUEST_SUBMIT.by()).await?;
        self.ctx.wait_for_page_load().await?;
        self.ctx.interactor().click(PROCEED_FROM_GUEST.by()).await?;
        self.ctx.wait_for_page_load().await?;
        Ok(at(self.ctx))
    }

    /// Submit the guest form as-is, without advancing the typestate.
    /// Negative-path probe: with required fields empty the page must stay
    /// on this step.
    pub async fn submit_guest_form(&self) -> PageResult<()> {
        self.ctx.interactor().click(GUEST_SUBMIT.by()).await?;
        self.ctx.wait_for_page_load().await
    }

    /// Whether the guest sign-in form is still the active step.
    pub async fn is_on_guest_step(&self) -> bool {
        self.ctx.is_visible(&GUEST_EMAIL).await
    }
}

impl Checkout<Billing> {
    /// Fill the billing address and advance to payment.
    pub async fn fill_billing_address(
        self,
        address: &BillingAddress,
    ) -> PageResult<Checkout<Payment>> {
        let interactor = self.ctx.interactor();
        interactor.fill(STREET.by(), &address.street).await?;
        interactor.fill(CITY.by(), &address.city).await?;
        interactor.fill(STATE.by(), &address.state).await?;
        interactor.fill(COUNTRY.by(), &address.country).await?;
        interactor.fill(POSTAL_CODE.by(), &address.postal_code).await?;
        interactor.click(PROCEED_FROM_BILLING.by()).await?;
        self.ctx.wait_for_page_load().await?;
        Ok(at(self.ctx))
    }
}

/// Which rejection surface the payment step shows for invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentRejection {
    /// An inline validation message is visible.
    ErrorMessage,
    /// The finish control is disabled.
    FinishDisabled,
    /// Neither surface fired; the input was accepted.
    NotRejected,
}

impl Checkout<Payment> {
    /// Select Credit Card, enter the card details, and submit.
    pub async fn pay_with_card(&self, card: &CreditCardPayment) -> PageResult<()> {
        self.enter_card_details(card).await?;
        self.finish().await
    }

    /// Select Credit Card and fill the card fields without submitting.
    /// Used by negative-path scenarios that inspect the validation surface.
    pub async fn enter_card_details(&self, card: &CreditCardPayment) -> PageResult<()> {
        let interactor = self.ctx.interactor();
        interactor
            .select_option(PAYMENT_METHOD.by(), PaymentMethod::CreditCard.label())
            .await?;
        interactor.fill(CARD_NUMBER.by(), &card.card_number).await?;
        interactor
            .fill(EXPIRATION_DATE.by(), &card.expiration_date)
            .await?;
        interactor.fill(CVV.by(), &card.cvv).await?;
        interactor
            .fill(CARD_HOLDER.by(), &card.card_holder_name)
            .await?;
        Ok(())
    }

    /// Pay with a non-card method: select it and submit.
    pub async fn pay_with(&self, method: PaymentMethod) -> PageResult<()> {
        self.ctx
            .interactor()
            .select_option(PAYMENT_METHOD.by(), method.label())
            .await?;
        self.finish().await
    }

    async fn finish(&self) -> PageResult<()> {
        self.ctx.interactor().click(FINISH.by()).await?;
        self.ctx.wait_for_page_load().await
    }

    /// Bounded probe for the success banner. Returns a boolean, not an
    /// assertion; callers decide pass/fail.
    pub async fn is_payment_successful(&self) -> bool {
        self.ctx
            .interactor()
            .is_visible(locator::text_xpath(messages::PAYMENT_SUCCESSFUL), SUCCESS_WAIT)
            .await
    }

    /// Inspect how the page rejected the current input. The storefront uses
    /// either an inline message or a disabled finish control depending on
    /// which field validation fires; the message is checked first, then the
    /// control state.
    pub async fn rejection(&self) -> PageResult<PaymentRejection> {
        let interactor = self.ctx.interactor();
        if interactor
            .is_visible(locator::text_xpath(messages::INVALID_DATE_FORMAT), REJECTION_WAIT)
            .await
        {
            return Ok(PaymentRejection::ErrorMessage);
        }
        if !interactor.is_enabled(FINISH.by()).await? {
            return Ok(PaymentRejection::FinishDisabled);
        }
        Ok(PaymentRejection::NotRejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_row_is_excluded_from_item_count() {
        assert_eq!(items_in_table(4), 3);
        assert_eq!(items_in_table(2), 1);
    }

    #[test]
    fn empty_table_counts_zero_without_underflow() {
        assert_eq!(items_in_table(0), 0);
        assert_eq!(items_in_table(1), 0);
    }

    #[test]
    fn checkout_selectors_use_the_data_test_contract() {
        for hook in [
            PROCEED_FROM_CART,
            GUEST_EMAIL,
            GUEST_SUBMIT,
            STREET,
            POSTAL_CODE,
            PAYMENT_METHOD,
            FINISH,
        ] {
            assert!(matches!(hook, Locator::DataTest(_)));
        }
    }
}
