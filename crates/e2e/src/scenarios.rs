//! The scenario catalog
//!
//! Each scenario is one fixed user journey through the storefront,
//! scripted against the page objects with no branching. Scenarios get a
//! fresh browser session each and never share state.

use std::time::Duration;

use tracing::info;

use toolshop_pages::{
    Checkout, HomePage, PageContext, PaymentMethod, PaymentRejection, ProductPage, SessionConfig,
};

use crate::fixtures::{addresses, cards, guests, invalid_cards, messages, products};
use crate::harness::{ensure, ensure_eq, with_session, Scenario, ScenarioError, ScenarioResult};

const BANNER_WAIT: Duration = Duration::from_secs(5);

/// Every scenario in the suite, in a stable order.
pub fn all() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "guest_checkout_with_three_products",
            tags: &["checkout", "smoke"],
            run: |cfg| Box::pin(guest_checkout_with_three_products(cfg)),
        },
        Scenario {
            name: "single_product_bank_transfer",
            tags: &["checkout"],
            run: |cfg| Box::pin(single_product_bank_transfer(cfg)),
        },
        Scenario {
            name: "invalid_expiration_is_rejected",
            tags: &["checkout", "negative"],
            run: |cfg| Box::pin(invalid_expiration_is_rejected(cfg)),
        },
        Scenario {
            name: "guest_step_requires_details",
            tags: &["checkout", "negative"],
            run: |cfg| Box::pin(guest_step_requires_details(cfg)),
        },
        Scenario {
            name: "cookie_consent_probe_is_idempotent",
            tags: &["smoke"],
            run: |cfg| Box::pin(cookie_consent_probe_is_idempotent(cfg)),
        },
        Scenario {
            name: "concurrent_sessions_keep_carts_isolated",
            tags: &["isolation"],
            run: |cfg| Box::pin(concurrent_sessions_keep_carts_isolated(cfg)),
        },
    ]
}

/// Open a product page by grid index, add it to the cart, and return home.
async fn add_product(ctx: &PageContext, index: usize) -> ScenarioResult {
    let home = HomePage::new(ctx.clone());
    home.click_product_by_index(index).await?;
    let url = ctx.current_url().await?;
    ensure("on a product page", url.path().contains("/product"))?;
    let product = ProductPage::new(ctx.clone());
    product.add_to_cart().await?;
    product.go_home().await?;
    Ok(())
}

/// Full guest checkout: three products, guest details, billing address,
/// credit card payment, success confirmation.
async fn guest_checkout_with_three_products(config: SessionConfig) -> ScenarioResult {
    with_session(&config, |ctx| async move {
        let home = HomePage::new(ctx.clone());
        home.open().await?;
        let title = ctx.title().await?;
        ensure(
            "storefront title",
            title.contains("Practice Software Testing"),
        )?;

        for index in [
            products::COMBINATION_PLIERS,
            products::PLIERS,
            products::HAMMER,
        ] {
            add_product(&ctx, index).await?;
        }
        ensure_eq("cart badge", home.cart_count().await?, 3)?;

        home.go_to_cart().await?;
        let url = ctx.current_url().await?;
        ensure("on the checkout page", url.path().contains("/checkout"))?;

        let cart = Checkout::at_cart(ctx.clone());
        ensure_eq("cart rows", cart.item_count().await?, 3)?;

        let guest_step = cart.proceed().await?;
        let billing = guest_step.continue_as_guest(&guests::john_doe()).await?;
        ctx.interactor()
            .wait_for_text(messages::CONTINUING_AS_GUEST, BANNER_WAIT)
            .await?;

        let payment = billing.fill_billing_address(&addresses::new_york()).await?;
        payment.pay_with_card(&cards::visa()).await?;
        ensure("payment confirmed", payment.is_payment_successful().await)?;

        let shot = ctx.interactor().screenshot("guest-checkout-success").await?;
        info!(path = %shot.display(), "success screenshot captured");
        Ok(())
    })
    .await
}

/// Single product bought with the bank transfer payment method.
async fn single_product_bank_transfer(config: SessionConfig) -> ScenarioResult {
    with_session(&config, |ctx| async move {
        let home = HomePage::new(ctx.clone());
        home.open().await?;
        add_product(&ctx, products::COMBINATION_PLIERS).await?;
        ensure_eq("cart badge", home.cart_count().await?, 1)?;

        home.go_to_cart().await?;
        let cart = Checkout::at_cart(ctx.clone());
        ensure_eq("cart rows", cart.item_count().await?, 1)?;

        let payment = cart
            .proceed()
            .await?
            .continue_as_guest(&guests::jane_smith())
            .await?
            .fill_billing_address(&addresses::los_angeles())
            .await?;
        payment.pay_with(PaymentMethod::BankTransfer).await?;
        ensure("payment confirmed", payment.is_payment_successful().await)?;
        Ok(())
    })
    .await
}

/// A card with a 13th month must not reach the success confirmation. The
/// storefront surfaces this either as an inline validation message or by
/// refusing to enable the finish button; both count as rejection.
async fn invalid_expiration_is_rejected(config: SessionConfig) -> ScenarioResult {
    with_session(&config, |ctx| async move {
        let home = HomePage::new(ctx.clone());
        home.open().await?;
        add_product(&ctx, products::HAMMER).await?;

        home.go_to_cart().await?;
        let payment = Checkout::at_cart(ctx.clone())
            .proceed()
            .await?
            .continue_as_guest(&guests::test_user())
            .await?
            .fill_billing_address(&addresses::test_city())
            .await?;

        payment
            .enter_card_details(&invalid_cards::invalid_month())
            .await?;
        let rejection = payment.rejection().await?;
        info!(?rejection, "payment rejection surface");
        ensure(
            "invalid expiration rejected",
            rejection != PaymentRejection::NotRejected,
        )?;
        Ok(())
    })
    .await
}

/// Submitting the guest form with every field empty keeps the checkout on
/// the guest step.
async fn guest_step_requires_details(config: SessionConfig) -> ScenarioResult {
    with_session(&config, |ctx| async move {
        let home = HomePage::new(ctx.clone());
        home.open().await?;
        add_product(&ctx, products::PLIERS).await?;

        home.go_to_cart().await?;
        let guest_step = Checkout::at_cart(ctx.clone()).proceed().await?;
        guest_step.submit_guest_form().await?;
        ensure("still on guest step", guest_step.is_on_guest_step().await)?;
        Ok(())
    })
    .await
}

/// The consent probe must be safe to run when no prompt is shown, and
/// must leave the page state untouched.
async fn cookie_consent_probe_is_idempotent(config: SessionConfig) -> ScenarioResult {
    with_session(&config, |ctx| async move {
        let home = HomePage::new(ctx.clone());
        home.open().await?;
        // open() already ran the probe once; running it again must not
        // click anything or fail.
        ctx.handle_cookie_consent().await;
        ctx.handle_cookie_consent().await;
        ensure_eq("cart badge untouched", home.cart_count().await?, 0)?;
        Ok(())
    })
    .await
}

/// Two fully independent sessions fill carts of different sizes; neither
/// cart leaks into the other.
async fn concurrent_sessions_keep_carts_isolated(config: SessionConfig) -> ScenarioResult {
    // The badge must be read before the session closes, so the journey
    // smuggles it out through a captured reference.
    async fn journey(config: SessionConfig, count: usize) -> Result<u32, ScenarioError> {
        let mut observed = 0;
        let observed_ref = &mut observed;
        with_session(&config, |ctx| async move {
            let home = HomePage::new(ctx.clone());
            home.open().await?;
            for index in 0..count {
                add_product(&ctx, index).await?;
            }
            *observed_ref = home.cart_count().await?;
            Ok(())
        })
        .await?;
        Ok(observed)
    }

    let first = tokio::spawn(journey(config.clone(), 1));
    let second = tokio::spawn(journey(config.clone(), 2));

    let first = first
        .await
        .map_err(|err| ScenarioError::Setup(err.to_string()))??;
    let second = second
        .await
        .map_err(|err| ScenarioError::Setup(err.to_string()))??;

    ensure_eq("first session cart", first, 1)?;
    ensure_eq("second session cart", second, 2)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let scenarios = all();
        let mut names: Vec<_> = scenarios.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), scenarios.len());
    }

    #[test]
    fn every_scenario_is_tagged() {
        for scenario in all() {
            assert!(!scenario.tags.is_empty(), "{} has no tags", scenario.name);
        }
    }

    #[test]
    fn checkout_tag_selects_the_purchase_journeys() {
        let tagged: Vec<_> = all()
            .into_iter()
            .filter(|s| s.has_tag("checkout"))
            .map(|s| s.name)
            .collect();
        assert_eq!(tagged.len(), 4);
        assert!(tagged.contains(&"guest_checkout_with_three_products"));
    }
}
