//! Shared page behaviors: navigation, cookie consent, page settling
//!
//! `PageContext` is the capability object injected into every page type
//! (composition instead of a base-class hierarchy). It owns the interaction
//! helper, the storefront base URL, and the navigation timeout.

use std::time::{Duration, Instant};

use thirtyfour::prelude::*;
use tracing::debug;
use url::Url;

use crate::error::{PageError, PageResult};
use crate::interact::{Interactor, POLL_INTERVAL};
use crate::locator::{Locator, CONSENT_PROMPTS};

/// Per-candidate wait while probing consent banners. Short and best-effort:
/// most page loads have no banner at all.
const CONSENT_WAIT: Duration = Duration::from_secs(2);

/// Default bounded wait for visibility probes.
const PROBE_WAIT: Duration = Duration::from_secs(5);

/// Quiescence delay after the document reports complete. WebDriver exposes
/// no network-idle signal, so readiness plus a short settle approximates it.
const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Shared behaviors available on every screen.
#[derive(Clone)]
pub struct PageContext {
    interactor: Interactor,
    base_url: Url,
    nav_timeout: Duration,
}

impl PageContext {
    pub fn new(interactor: Interactor, base_url: Url, nav_timeout: Duration) -> Self {
        Self {
            interactor,
            base_url,
            nav_timeout,
        }
    }

    pub fn interactor(&self) -> &Interactor {
        &self.interactor
    }

    pub fn driver(&self) -> &WebDriver {
        self.interactor.driver()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Load a path relative to the base URL, then unconditionally attempt
    /// consent dismissal.
    pub async fn navigate(&self, path: &str) -> PageResult<()> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| PageError::InvalidConfig(format!("invalid path {path:?}: {err}")))?;
        debug!(%url, "navigating");
        self.driver().goto(url.as_str()).await?;
        self.handle_cookie_consent().await;
        Ok(())
    }

    /// Probe the ordered consent candidates and click the first one visible
    /// within a short bounded wait. Best-effort and idempotent: if no banner
    /// exists, or one vanishes between probe and click, the next candidate
    /// is tried and the call completes silently.
    pub async fn handle_cookie_consent(&self) {
        for prompt in CONSENT_PROMPTS {
            let by = prompt.by();
            let found = self
                .driver()
                .query(by)
                .wait(CONSENT_WAIT, POLL_INTERVAL)
                .first()
                .await;
            if let Ok(button) = found {
                if button.is_displayed().await.unwrap_or(false) && button.click().await.is_ok() {
                    debug!(prompt = ?prompt, "dismissed cookie consent");
                    break;
                }
            }
        }
    }

    /// Block until the document reports itself complete, then allow a short
    /// quiescence delay for in-flight rendering.
    pub async fn wait_for_page_load(&self) -> PageResult<()> {
        let deadline = Instant::now() + self.nav_timeout;
        loop {
            let state = self
                .driver()
                .execute("return document.readyState;", Vec::new())
                .await?;
            if state.json().as_str() == Some("complete") {
                break;
            }
            if Instant::now() >= deadline {
                return Err(PageError::Timeout {
                    what: "page load".to_string(),
                    timeout_ms: self.nav_timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        tokio::time::sleep(SETTLE_DELAY).await;
        Ok(())
    }

    /// Bounded visibility probe; absent elements answer `false`.
    pub async fn is_visible(&self, locator: &Locator) -> bool {
        self.interactor.is_visible(locator.by(), PROBE_WAIT).await
    }

    pub async fn title(&self) -> PageResult<String> {
        Ok(self.driver().title().await?)
    }

    pub async fn current_url(&self) -> PageResult<Url> {
        Ok(self.driver().current_url().await?)
    }

    /// End the underlying WebDriver session.
    pub async fn quit(self) -> PageResult<()> {
        self.driver().clone().quit().await?;
        Ok(())
    }
}
