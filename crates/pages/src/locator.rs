//! Locator descriptors for the storefront's selector contract
//!
//! The application under test exposes stable `data-test` attribute hooks as
//! the primary selector contract; text and role matches are fallbacks for
//! elements without hooks. A [`Locator`] is a plain descriptor rendered to a
//! [`By`] at interaction time, so ordered fallback lists (like the cookie
//! consent probe) are just const slices.

use thirtyfour::By;

/// A locator descriptor, preferred hooks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// Primary contract: `[data-test="…"]`.
    DataTest(&'static str),
    /// Prefix match over attribute hooks: `[data-test^="…"]`.
    DataTestPrefix(&'static str),
    /// Raw CSS fallback.
    Css(&'static str),
    /// A button matched by its visible text.
    ButtonText(&'static str),
    /// Any element containing the given text.
    Text(&'static str),
    /// ARIA role plus accessible name.
    Role {
        role: &'static str,
        name: &'static str,
    },
}

impl Locator {
    /// Render this descriptor to a WebDriver selector.
    pub fn by(&self) -> By {
        match self {
            Self::DataTest(name) => By::Css(&format!(r#"[data-test="{name}"]"#)),
            Self::DataTestPrefix(prefix) => By::Css(&format!(r#"[data-test^="{prefix}"]"#)),
            Self::Css(selector) => By::Css(*selector),
            Self::ButtonText(text) => {
                By::XPath(&format!("//button[contains(normalize-space(.),'{text}')]"))
            }
            Self::Text(text) => By::XPath(&text_xpath_expr(text)),
            Self::Role { role, name } => By::XPath(&format!(
                "//*[@role='{role}' and contains(normalize-space(.),'{name}')]"
            )),
        }
    }
}

/// Selector matching any element containing `text`. For texts only known at
/// runtime; const-known texts use [`Locator::Text`].
pub fn text_xpath(text: &str) -> By {
    By::XPath(&text_xpath_expr(text))
}

fn text_xpath_expr(text: &str) -> String {
    format!("//*[contains(text(),'{text}')]")
}

/// Cookie consent dismissal candidates, probed in order. Banners vary by
/// locale and deployment: plain-text button matches in two languages first,
/// then the test hook, then a class-based fallback.
pub const CONSENT_PROMPTS: &[Locator] = &[
    Locator::ButtonText("Accept"),
    Locator::ButtonText("Accept All"),
    Locator::ButtonText("Akzeptieren"),
    Locator::Css(r#"[data-testid="cookie-accept"]"#),
    Locator::Css(".cookie-consent button"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_test_renders_attribute_selector() {
        let by = Locator::DataTest("nav-cart").by();
        assert!(by.to_string().contains(r#"[data-test="nav-cart"]"#));
    }

    #[test]
    fn prefix_renders_caret_match() {
        let by = Locator::DataTestPrefix("product-").by();
        assert!(by.to_string().contains(r#"[data-test^="product-"]"#));
    }

    #[test]
    fn button_text_renders_xpath() {
        let by = Locator::ButtonText("Accept").by();
        assert!(by.to_string().contains("//button[contains"));
    }

    #[test]
    fn consent_prompts_probe_text_before_hooks() {
        assert_eq!(CONSENT_PROMPTS.len(), 5);
        assert!(matches!(CONSENT_PROMPTS[0], Locator::ButtonText(_)));
        assert!(matches!(CONSENT_PROMPTS[3], Locator::Css(_)));
    }
}
