//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Checkout-related errors
///
/// Processor failures display as the raw processor message so the handler can
/// hand it back to the caller unchanged.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("{0}")]
    Stripe(String),

    /// Any other gateway failure
    #[error("{0}")]
    Gateway(String),

    /// Session was created but carries no hosted page URL
    #[error("Checkout session has no redirect URL")]
    MissingRedirectUrl,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<stripe::StripeError> for PaymentError {
    fn from(err: stripe::StripeError) -> Self {
        match err {
            stripe::StripeError::Stripe(request_error) => Self::Stripe(
                request_error
                    .message
                    .unwrap_or_else(|| format!("Stripe request failed with status {}", request_error.http_status)),
            ),
            other => Self::Stripe(other.to_string()),
        }
    }
}
