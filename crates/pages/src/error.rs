//! Error types for the page-object layer

use thiserror::Error;

/// Result type alias for page-object operations.
pub type PageResult<T> = std::result::Result<T, PageError>;

/// Errors raised by page objects and interaction helpers.
///
/// Probe-style methods never produce these; they convert absence to a
/// boolean instead. Action methods propagate them unchanged after logging
/// the failing selector.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("webdriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("element not ready within {timeout_ms} ms: {selector}")]
    Interaction {
        selector: String,
        timeout_ms: u64,
        #[source]
        source: thirtyfour::error::WebDriverError,
    },

    #[error("timed out after {timeout_ms} ms waiting for {what}")]
    Timeout { what: String, timeout_ms: u64 },

    #[error("product index {index} out of range: page renders {available} products")]
    ProductIndex { index: usize, available: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
