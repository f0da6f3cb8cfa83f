//! # checkout-payments
//!
//! Turns plan/option names into a Stripe Checkout (Hosted) session.
//!
//! ```text
//! ┌───────────────────┐     ┌───────────┐     ┌─────────────────┐
//! │ ?plan=…&option=…  │────▶│  Catalog  │────▶│ CheckoutGateway │──▶ session.url
//! │    (Selection)    │     │ (resolve) │     │ (Stripe / Mock) │
//! └───────────────────┘     └───────────┘     └─────────────────┘
//! ```
//!
//! Unknown names are dropped during resolution. An empty selection still
//! reaches the gateway, and Stripe rejects it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_payments::{Catalog, CheckoutGateway, RedirectUrls, Selection, SessionRequest, StripeClient};
//!
//! let client = StripeClient::new("sk_test_xxx");
//! let catalog = Catalog::standard();
//!
//! let selection = Selection::from_pairs([("plan", "プランA"), ("option", "オプションA, オプションC")]);
//! let request = SessionRequest::card_payment(catalog.resolve(&selection), &RedirectUrls::default());
//! let session = client.create_session(&request).await?;
//!
//! // Redirect user to: session.url
//! ```

mod catalog;
mod error;
pub mod gateway;

pub use catalog::{Catalog, LineItem, STANDARD_PRICES, Selection};
pub use error::{PaymentError, Result};
pub use gateway::{
    CheckoutGateway, CheckoutSession, MockGateway, PaymentMethod, PaymentMode, RedirectUrls,
    SessionRequest, StripeClient,
};
