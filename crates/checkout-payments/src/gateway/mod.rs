//! Checkout Gateway
//!
//! Abstraction over the payment processor that creates hosted checkout
//! sessions.

mod mock;
mod stripe_checkout;

pub use self::mock::{EMPTY_LINE_ITEMS_MESSAGE, MockGateway};
pub use self::stripe_checkout::StripeClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::LineItem;
use crate::error::Result;

/// Default landing page after a completed payment
pub const DEFAULT_SUCCESS_URL: &str = "https://stripe-checkout-vercel.vercel.app/success";

/// Default landing page when the customer backs out
pub const DEFAULT_CANCEL_URL: &str = "https://stripe-checkout-vercel.vercel.app/cancel";

/// Checkout gateway trait (Strategy pattern)
///
/// `StripeClient` talks to Stripe; `MockGateway` records requests in-process.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Create a hosted checkout session
    async fn create_session(&self, request: &SessionRequest) -> Result<CheckoutSession>;

    /// Gateway name
    fn name(&self) -> &str;
}

/// Checkout mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// One-time payment
    Payment,
}

/// Accepted payment method
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
}

/// Where Stripe sends the customer after checkout
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl Default for RedirectUrls {
    fn default() -> Self {
        Self {
            success_url: DEFAULT_SUCCESS_URL.into(),
            cancel_url: DEFAULT_CANCEL_URL.into(),
        }
    }
}

impl RedirectUrls {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            success_url: std::env::var("CHECKOUT_SUCCESS_URL").unwrap_or(defaults.success_url),
            cancel_url: std::env::var("CHECKOUT_CANCEL_URL").unwrap_or(defaults.cancel_url),
        }
    }
}

/// Request to create a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub mode: PaymentMode,
    pub payment_method_types: Vec<PaymentMethod>,

    /// May be empty; the processor decides whether that is acceptable
    pub line_items: Vec<LineItem>,

    pub success_url: String,
    pub cancel_url: String,
}

impl SessionRequest {
    /// One-time card payment for the given items
    pub fn card_payment(line_items: Vec<LineItem>, urls: &RedirectUrls) -> Self {
        Self {
            mode: PaymentMode::Payment,
            payment_method_types: vec![PaymentMethod::Card],
            line_items,
            success_url: urls.success_url.clone(),
            cancel_url: urls.cancel_url.clone(),
        }
    }
}

/// Result of creating a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Processor session ID
    pub id: String,

    /// Hosted payment page; the processor may omit it
    pub url: Option<String>,
}
