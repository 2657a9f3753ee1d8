//! Message text rendered by the storefront that pages wait on and
//! scenarios assert against.

pub const PRODUCT_ADDED: &str = "Product added to shopping cart";
pub const CONTINUING_AS_GUEST: &str = "Continuing as guest";
pub const PAYMENT_SUCCESSFUL: &str = "Payment was successful";
pub const INVALID_DATE_FORMAT: &str = "Invalid date format";
