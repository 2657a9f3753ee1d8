//! Low-level interaction wrappers: bounded waits around click, fill and
//! select, plus probe-style queries
//!
//! Action methods (`click`, `fill`, `select_option`, `wait_for_text`) wait
//! for element readiness within the configured action timeout and, on
//! failure, emit one structured log line naming the selector before
//! propagating the error. They never retry and never swallow - recovery is
//! the caller's decision. Probe methods (`is_visible`) swallow errors and
//! answer `false`, because absence is an expected outcome for them.

use std::path::PathBuf;
use std::time::Duration;

use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;
use tracing::{debug, error};

use crate::error::{PageError, PageResult};
use crate::locator;

/// Poll interval shared by all bounded waits.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Shared interaction capability over one WebDriver session.
#[derive(Clone)]
pub struct Interactor {
    driver: WebDriver,
    action_timeout: Duration,
    screenshot_dir: PathBuf,
}

impl Interactor {
    pub fn new(driver: WebDriver, action_timeout: Duration, screenshot_dir: PathBuf) -> Self {
        Self {
            driver,
            action_timeout,
            screenshot_dir,
        }
    }

    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    pub fn action_timeout(&self) -> Duration {
        self.action_timeout
    }

    /// Wait for the element, scroll it into view, and click it.
    pub async fn click(&self, by: By) -> PageResult<()> {
        let selector = by.to_string();
        let result = self.try_click(by).await;
        if let Err(err) = &result {
            error!(%selector, %err, "failed to click element");
        }
        result
    }

    async fn try_click(&self, by: By) -> PageResult<()> {
        let element = self.ready_element(by).await?;
        element
            .wait_until()
            .wait(self.action_timeout, POLL_INTERVAL)
            .clickable()
            .await?;
        element.scroll_into_view().await?;
        element.click().await?;
        Ok(())
    }

    /// Wait for the input, clear it, and type the given text.
    pub async fn fill(&self, by: By, text: &str) -> PageResult<()> {
        let selector = by.to_string();
        let result = self.try_fill(by, text).await;
        if let Err(err) = &result {
            error!(%selector, %err, "failed to fill element");
        }
        result
    }

    async fn try_fill(&self, by: By, text: &str) -> PageResult<()> {
        let element = self.ready_element(by).await?;
        element
            .wait_until()
            .wait(self.action_timeout, POLL_INTERVAL)
            .displayed()
            .await?;
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    /// Select a dropdown option by its exact visible label.
    pub async fn select_option(&self, by: By, label: &str) -> PageResult<()> {
        let selector = by.to_string();
        let result = self.try_select(by, label).await;
        if let Err(err) = &result {
            error!(%selector, label, %err, "failed to select option");
        }
        result
    }

    async fn try_select(&self, by: By, label: &str) -> PageResult<()> {
        let element = self.ready_element(by).await?;
        let select = SelectElement::new(&element).await?;
        select.select_by_exact_text(label).await?;
        Ok(())
    }

    /// Trimmed text content of the first matching element.
    pub async fn text_of(&self, by: By) -> PageResult<String> {
        let element = self.ready_element(by).await?;
        Ok(element.text().await?.trim().to_string())
    }

    /// All elements matching `by`, waiting up to the action timeout for at
    /// least one. An empty vec is a valid answer, not an error.
    pub async fn elements(&self, by: By) -> PageResult<Vec<WebElement>> {
        Ok(self
            .driver
            .query(by)
            .wait(self.action_timeout, POLL_INTERVAL)
            .all()
            .await?)
    }

    /// Number of elements matching `by`. Zero matches is a valid answer.
    pub async fn count_of(&self, by: By) -> PageResult<usize> {
        Ok(self.elements(by).await?.len())
    }

    /// Bounded visibility probe. Swallows errors: an element that never
    /// appears, or disappears mid-check, is simply not visible.
    pub async fn is_visible(&self, by: By, within: Duration) -> bool {
        match self.driver.query(by).wait(within, POLL_INTERVAL).first().await {
            Ok(element) => element.is_displayed().await.unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Whether the first matching element is currently enabled.
    pub async fn is_enabled(&self, by: By) -> PageResult<bool> {
        let element = self.ready_element(by).await?;
        Ok(element.is_enabled().await?)
    }

    /// Wait for the given text to be visible anywhere on the page.
    pub async fn wait_for_text(&self, text: &str, within: Duration) -> PageResult<()> {
        if self.is_visible(locator::text_xpath(text), within).await {
            Ok(())
        } else {
            error!(text, "text did not appear within the wait budget");
            Err(PageError::Timeout {
                what: format!("text '{text}'"),
                timeout_ms: within.as_millis() as u64,
            })
        }
    }

    /// On-demand screenshot written to `<screenshot_dir>/<label>.png`.
    /// Not part of pass/fail logic.
    pub async fn screenshot(&self, label: &str) -> PageResult<PathBuf> {
        std::fs::create_dir_all(&self.screenshot_dir)?;
        let path = self.screenshot_dir.join(format!("{label}.png"));
        self.driver.screenshot(&path).await?;
        debug!(path = %path.display(), "screenshot saved");
        Ok(path)
    }

    async fn ready_element(&self, by: By) -> PageResult<WebElement> {
        let selector = by.to_string();
        self.driver
            .query(by)
            .wait(self.action_timeout, POLL_INTERVAL)
            .first()
            .await
            .map_err(|source| PageError::Interaction {
                selector,
                timeout_ms: self.action_timeout.as_millis() as u64,
                source,
            })
    }
}
