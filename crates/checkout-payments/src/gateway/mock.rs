//! Mock Checkout Gateway
//!
//! For testing and local demos. Records every request and answers the way
//! Stripe does for the cases the server cares about.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{CheckoutGateway, CheckoutSession, SessionRequest};
use crate::error::{PaymentError, Result};

/// Message Stripe returns for a payment-mode session without line items
pub const EMPTY_LINE_ITEMS_MESSAGE: &str = "line_items is required in `payment` mode.";

#[derive(Clone, Debug)]
enum Outcome {
    /// Return a session pointing at this URL
    Redirect(String),
    /// Return a session with no URL
    NoUrl,
    /// Fail with this message
    Fail(String),
}

/// In-process gateway that records requests
pub struct MockGateway {
    outcome: Outcome,
    requests: Mutex<Vec<SessionRequest>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new("https://checkout.stripe.com/c/pay/cs_test_mock")
    }
}

impl MockGateway {
    /// Succeed with `url` (empty line items are still rejected)
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Redirect(url.into()))
    }

    /// Fail every call with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Fail(message.into()))
    }

    /// Succeed but omit the hosted page URL
    pub fn without_url() -> Self {
        Self::with_outcome(Outcome::NoUrl)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// All requests received so far
    pub async fn requests(&self) -> Vec<SessionRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of calls received so far
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl CheckoutGateway for MockGateway {
    async fn create_session(&self, request: &SessionRequest) -> Result<CheckoutSession> {
        let call = {
            let mut requests = self.requests.lock().await;
            requests.push(request.clone());
            requests.len()
        };

        if let Outcome::Fail(message) = &self.outcome {
            return Err(PaymentError::Gateway(message.clone()));
        }

        if request.line_items.is_empty() {
            return Err(PaymentError::Stripe(EMPTY_LINE_ITEMS_MESSAGE.into()));
        }

        let url = match &self.outcome {
            Outcome::Redirect(url) => Some(url.clone()),
            Outcome::NoUrl | Outcome::Fail(_) => None,
        };

        Ok(CheckoutSession {
            id: format!("cs_test_mock_{call}"),
            url,
        })
    }

    fn name(&self) -> &str {
        "MockGateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LineItem;
    use crate::gateway::RedirectUrls;

    fn request(items: Vec<LineItem>) -> SessionRequest {
        SessionRequest::card_payment(items, &RedirectUrls::default())
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let gateway = MockGateway::new("https://pay.example/cs_1");

        let session = gateway
            .create_session(&request(vec![LineItem::single("price_XXXA")]))
            .await
            .unwrap();

        assert_eq!(session.url.as_deref(), Some("https://pay.example/cs_1"));
        assert_eq!(session.id, "cs_test_mock_1");
        assert_eq!(gateway.call_count().await, 1);
        assert_eq!(gateway.requests().await[0].line_items[0].price, "price_XXXA");
    }

    #[tokio::test]
    async fn test_mock_rejects_empty_items() {
        let gateway = MockGateway::default();
        let err = gateway.create_session(&request(vec![])).await.unwrap_err();

        assert_eq!(err.to_string(), EMPTY_LINE_ITEMS_MESSAGE);
        assert_eq!(gateway.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let gateway = MockGateway::failing("boom");
        let err = gateway
            .create_session(&request(vec![LineItem::single("price_XXXA")]))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn test_mock_without_url() {
        let gateway = MockGateway::without_url();
        let session = gateway
            .create_session(&request(vec![LineItem::single("price_OPTA")]))
            .await
            .unwrap();

        assert!(session.url.is_none());
    }
}
