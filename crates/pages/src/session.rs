//! WebDriver session bootstrap and environment-driven configuration

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thirtyfour::{Capabilities, DesiredCapabilities, WebDriver};
use tracing::info;
use url::Url;

use crate::error::{PageError, PageResult};
use crate::interact::Interactor;
use crate::page::PageContext;

/// Environment variable naming the WebDriver endpoint. When unset, callers
/// treat browser scenarios as skipped.
pub const WEBDRIVER_URL_VAR: &str = "E2E_WEBDRIVER_URL";

pub const DEFAULT_BASE_URL: &str = "https://practicesoftwaretesting.com/";

const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";
const DEFAULT_ACTION_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_NAV_TIMEOUT: Duration = Duration::from_secs(10);

/// Supported WebDriver backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserKind {
    #[default]
    Firefox,
    Chrome,
}

impl FromStr for BrowserKind {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "firefox" | "gecko" => Ok(Self::Firefox),
            "chrome" | "chromium" => Ok(Self::Chrome),
            other => Err(PageError::InvalidConfig(format!(
                "unknown browser: {other}"
            ))),
        }
    }
}

impl BrowserKind {
    /// Build WebDriver capabilities for this browser.
    pub fn capabilities(&self, headless: bool) -> PageResult<Capabilities> {
        match self {
            Self::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if headless {
                    caps.set_headless()?;
                }
                Ok(caps.into())
            }
            Self::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if headless {
                    caps.set_headless()?;
                }
                caps.add_chrome_arg("--window-size=1920,1080")?;
                Ok(caps.into())
            }
        }
    }
}

/// Everything needed to open one isolated browser session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub webdriver_url: String,
    pub base_url: Url,
    pub browser: BrowserKind,
    pub headless: bool,
    pub screenshot_dir: PathBuf,
    pub action_timeout: Duration,
    pub nav_timeout: Duration,
}

impl SessionConfig {
    /// Configuration with library defaults and the given WebDriver endpoint.
    pub fn with_webdriver_url(webdriver_url: impl Into<String>) -> PageResult<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|err| PageError::InvalidConfig(format!("default base url: {err}")))?;
        Ok(Self {
            webdriver_url: webdriver_url.into(),
            base_url,
            browser: BrowserKind::default(),
            headless: true,
            screenshot_dir: PathBuf::from(DEFAULT_SCREENSHOT_DIR),
            action_timeout: DEFAULT_ACTION_TIMEOUT,
            nav_timeout: DEFAULT_NAV_TIMEOUT,
        })
    }

    /// Read configuration from `E2E_*` environment variables.
    ///
    /// Returns `Ok(None)` when no WebDriver endpoint is configured, which
    /// callers treat as "skip browser scenarios".
    pub fn from_env() -> PageResult<Option<Self>> {
        let Ok(webdriver_url) = env::var(WEBDRIVER_URL_VAR) else {
            return Ok(None);
        };
        let mut config = Self::with_webdriver_url(webdriver_url)?;
        if let Ok(base) = env::var("E2E_BASE_URL") {
            config.base_url = Url::parse(&base)
                .map_err(|err| PageError::InvalidConfig(format!("E2E_BASE_URL: {err}")))?;
        }
        if let Ok(browser) = env::var("E2E_BROWSER") {
            config.browser = browser.parse()?;
        }
        if let Ok(headed) = env::var("E2E_HEADED") {
            config.headless = !parse_flag(&headed);
        }
        if let Ok(dir) = env::var("E2E_SCREENSHOT_DIR") {
            config.screenshot_dir = PathBuf::from(dir);
        }
        Ok(Some(config))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// Open a fresh, isolated browser session described by `config`.
///
/// Every session gets its own browser context; nothing is shared between
/// concurrently connected sessions.
pub async fn connect(config: &SessionConfig) -> PageResult<PageContext> {
    let caps = config.browser.capabilities(config.headless)?;
    let driver = WebDriver::new(&config.webdriver_url, caps).await?;
    let _ = driver.maximize_window().await;
    info!(
        webdriver = %config.webdriver_url,
        browser = ?config.browser,
        headless = config.headless,
        "webdriver session established"
    );
    let interactor = Interactor::new(
        driver,
        config.action_timeout,
        config.screenshot_dir.clone(),
    );
    Ok(PageContext::new(
        interactor,
        config.base_url.clone(),
        config.nav_timeout,
    ))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn browser_kind_parses_common_names() {
        assert_eq!("firefox".parse::<BrowserKind>().unwrap(), BrowserKind::Firefox);
        assert_eq!("Chrome".parse::<BrowserKind>().unwrap(), BrowserKind::Chrome);
        assert_eq!("chromium".parse::<BrowserKind>().unwrap(), BrowserKind::Chrome);
        assert!("safari".parse::<BrowserKind>().is_err());
    }

    #[test]
    fn flag_parsing_accepts_usual_spellings() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("no"));
    }

    #[test]
    #[serial]
    fn from_env_skips_without_webdriver_endpoint() {
        env::remove_var(WEBDRIVER_URL_VAR);
        assert!(SessionConfig::from_env().unwrap().is_none());
    }

    #[test]
    #[serial]
    fn from_env_reads_overrides() {
        env::set_var(WEBDRIVER_URL_VAR, "http://localhost:4444");
        env::set_var("E2E_BASE_URL", "https://staging.example.com/");
        env::set_var("E2E_BROWSER", "chrome");
        env::set_var("E2E_HEADED", "1");

        let config = SessionConfig::from_env().unwrap().unwrap();
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(config.base_url.as_str(), "https://staging.example.com/");
        assert_eq!(config.browser, BrowserKind::Chrome);
        assert!(!config.headless);

        env::remove_var(WEBDRIVER_URL_VAR);
        env::remove_var("E2E_BASE_URL");
        env::remove_var("E2E_BROWSER");
        env::remove_var("E2E_HEADED");
    }

    #[test]
    fn defaults_match_the_storefront() {
        let config = SessionConfig::with_webdriver_url("http://localhost:4444").unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.action_timeout, Duration::from_secs(10));
        assert!(config.headless);
    }
}
