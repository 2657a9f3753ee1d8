//! Product detail page: quantity selection and add-to-cart

use std::time::Duration;

use crate::error::PageResult;
use crate::locator::Locator;
use crate::messages;
use crate::page::PageContext;

const ADD_TO_CART: Locator = Locator::DataTest("add-to-cart");
const QUANTITY_INPUT: Locator = Locator::DataTest("quantity");
const INCREASE_QUANTITY: Locator = Locator::ButtonText("Increase quantity");
const DECREASE_QUANTITY: Locator = Locator::ButtonText("Decrease quantity");
const PRODUCT_TITLE: Locator = Locator::Css("h1");
const PRODUCT_PRICE: Locator = Locator::Css(r#"[data-test="product-price"], .price"#);
const NAV_HOME: Locator = Locator::DataTest("nav-home");

const TOAST_WAIT: Duration = Duration::from_secs(5);

pub struct ProductPage {
    ctx: PageContext,
}

impl ProductPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    /// Add the current product to the cart and wait for the confirmation
    /// toast before returning.
    pub async fn add_to_cart(&self) -> PageResult<()> {
        self.ctx.interactor().click(ADD_TO_CART.by()).await?;
        self.ctx
            .interactor()
            .wait_for_text(messages::PRODUCT_ADDED, TOAST_WAIT)
            .await
    }

    /// Overwrite the quantity input.
    pub async fn set_quantity(&self, quantity: u32) -> PageResult<()> {
        self.ctx
            .interactor()
            .fill(QUANTITY_INPUT.by(), &quantity.to_string())
            .await
    }

    pub async fn increase_quantity(&self) -> PageResult<()> {
        self.ctx.interactor().click(INCREASE_QUANTITY.by()).await
    }

    pub async fn decrease_quantity(&self) -> PageResult<()> {
        self.ctx.interactor().click(DECREASE_QUANTITY.by()).await
    }

    pub async fn product_name(&self) -> PageResult<String> {
        self.ctx.interactor().text_of(PRODUCT_TITLE.by()).await
    }

    /// Rendered unit price, trimmed (e.g. "$14.15").
    pub async fn product_price(&self) -> PageResult<String> {
        self.ctx.interactor().text_of(PRODUCT_PRICE.by()).await
    }

    /// Navigate back to the home page grid.
    pub async fn go_home(&self) -> PageResult<()> {
        self.ctx.interactor().click(NAV_HOME.by()).await?;
        self.ctx.wait_for_page_load().await
    }
}
