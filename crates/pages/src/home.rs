//! Home page: product grid, cart badge, top navigation

use std::time::Duration;

use thirtyfour::By;

use crate::error::{PageError, PageResult};
use crate::locator::Locator;
use crate::page::PageContext;

const PRODUCT_CARDS: Locator = Locator::DataTestPrefix("product-");
// Attribute hooks are missing on some deployments; fall back to link shape.
const PRODUCT_LINK_FALLBACK: Locator = Locator::Css(r#"a[href*="/product/"]"#);
const NAV_CART: Locator = Locator::DataTest("nav-cart");
const CART_BADGE: Locator = Locator::Css(r#"[data-test="nav-cart"] span"#);

/// Empty carts render no badge at all, so the probe here stays short.
const BADGE_WAIT: Duration = Duration::from_secs(2);

pub struct HomePage {
    ctx: PageContext,
}

impl HomePage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    /// Open the storefront landing page and wait for it to settle.
    pub async fn open(&self) -> PageResult<()> {
        self.ctx.navigate("/").await?;
        self.ctx.wait_for_page_load().await
    }

    /// Click the n-th product card (0-based) in the rendered grid.
    ///
    /// Positional indices depend on the external page ordering and are
    /// fragile by construction; scenarios pin them through the fixture
    /// catalog rather than re-deriving them.
    pub async fn click_product_by_index(&self, index: usize) -> PageResult<()> {
        let interactor = self.ctx.interactor();
        let mut cards = interactor.elements(PRODUCT_CARDS.by()).await?;
        if cards.is_empty() {
            cards = interactor.elements(PRODUCT_LINK_FALLBACK.by()).await?;
        }
        let available = cards.len();
        let card = cards
            .into_iter()
            .nth(index)
            .ok_or(PageError::ProductIndex { index, available })?;
        card.scroll_into_view().await?;
        card.click().await?;
        self.ctx.wait_for_page_load().await
    }

    /// Click a product link by its visible name.
    pub async fn click_product_by_name(&self, name: &str) -> PageResult<()> {
        let by = By::XPath(&format!("//a[contains(normalize-space(.),'{name}')]"));
        self.ctx.interactor().click(by).await?;
        self.ctx.wait_for_page_load().await
    }

    /// Item count shown on the navigation cart badge; 0 when the badge is
    /// absent or empty (no items yet).
    pub async fn cart_count(&self) -> PageResult<u32> {
        let interactor = self.ctx.interactor();
        if !interactor.is_visible(CART_BADGE.by(), BADGE_WAIT).await {
            return Ok(0);
        }
        let text = interactor.text_of(CART_BADGE.by()).await?;
        Ok(text.trim().parse().unwrap_or(0))
    }

    /// Open the cart/checkout page.
    pub async fn go_to_cart(&self) -> PageResult<()> {
        self.ctx.interactor().click(NAV_CART.by()).await?;
        self.ctx.wait_for_page_load().await
    }
}
