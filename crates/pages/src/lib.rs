//! Page-object layer for the Toolshop storefront
//!
//! This crate wraps the WebDriver protocol (via `thirtyfour`) behind
//! intention-revealing page objects for an e-commerce demo site:
//!
//! - [`Interactor`] - low-level click/fill/select wrappers with bounded waits
//! - [`PageContext`] - shared page behaviors (navigation, cookie consent,
//!   page settling, visibility probes), injected into every page type
//! - [`HomePage`], [`ProductPage`], [`Checkout`] - one type per screen
//!
//! Every interaction method performs its action and then waits for the
//! resulting page settle before returning, so callers never add their own
//! waits. Probe methods (`is_visible`, consent handling, success checks)
//! convert absence to `false` instead of raising; action methods log the
//! failing selector and propagate the error unchanged.

pub mod checkout;
pub mod error;
pub mod home;
pub mod interact;
pub mod locator;
pub mod messages;
pub mod model;
pub mod page;
pub mod product;
pub mod session;

pub use checkout::{Billing, Cart, Checkout, Guest, Payment, PaymentRejection};
pub use error::{PageError, PageResult};
pub use home::HomePage;
pub use interact::Interactor;
pub use locator::Locator;
pub use model::{BillingAddress, CreditCardPayment, GuestUser, PaymentMethod};
pub use page::PageContext;
pub use product::ProductPage;
pub use session::{connect, BrowserKind, SessionConfig};
