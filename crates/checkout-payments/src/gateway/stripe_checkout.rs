//! Stripe Checkout Integration
//!
//! Creates "Stripe Checkout (Hosted)" sessions from resolved price IDs.

use async_trait::async_trait;
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems, CreateCheckoutSessionPaymentMethodTypes,
};

use super::{CheckoutGateway, CheckoutSession, PaymentMethod, PaymentMode, SessionRequest};
use crate::error::{PaymentError, Result};

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self::new(&secret_key))
    }

    fn line_items(request: &SessionRequest) -> Vec<CreateCheckoutSessionLineItems> {
        request
            .line_items
            .iter()
            .map(|item| CreateCheckoutSessionLineItems {
                price: Some(item.price.clone()),
                quantity: Some(item.quantity),
                ..Default::default()
            })
            .collect()
    }

    const fn mode(mode: PaymentMode) -> CheckoutSessionMode {
        match mode {
            PaymentMode::Payment => CheckoutSessionMode::Payment,
        }
    }

    const fn payment_method(method: PaymentMethod) -> CreateCheckoutSessionPaymentMethodTypes {
        match method {
            PaymentMethod::Card => CreateCheckoutSessionPaymentMethodTypes::Card,
        }
    }
}

#[async_trait]
impl CheckoutGateway for StripeClient {
    async fn create_session(&self, request: &SessionRequest) -> Result<CheckoutSession> {
        let mut params = CreateCheckoutSession::new();
        params.mode = Some(Self::mode(request.mode));
        params.payment_method_types = Some(
            request
                .payment_method_types
                .iter()
                .copied()
                .map(Self::payment_method)
                .collect(),
        );
        // Sent even when empty; Stripe rejects payment mode without items.
        params.line_items = Some(Self::line_items(request));
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);

        let session = StripeCheckoutSession::create(&self.client, params).await?;

        tracing::info!(session_id = %session.id, items = request.line_items.len(), "Created Stripe checkout session");

        Ok(CheckoutSession {
            id: session.id.to_string(),
            url: session.url,
        })
    }

    fn name(&self) -> &str {
        "Stripe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LineItem;
    use crate::gateway::RedirectUrls;

    #[test]
    fn test_line_item_conversion() {
        let request = SessionRequest::card_payment(
            vec![LineItem::single("price_XXXB"), LineItem::single("price_OPTA")],
            &RedirectUrls::default(),
        );

        let items = StripeClient::line_items(&request);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price.as_deref(), Some("price_XXXB"));
        assert_eq!(items[1].price.as_deref(), Some("price_OPTA"));
        assert!(items.iter().all(|i| i.quantity == Some(1)));
    }

    #[test]
    fn test_mode_and_method_mapping() {
        assert!(matches!(StripeClient::mode(PaymentMode::Payment), CheckoutSessionMode::Payment));
        assert!(matches!(
            StripeClient::payment_method(PaymentMethod::Card),
            CreateCheckoutSessionPaymentMethodTypes::Card
        ));
    }

    #[test]
    fn test_client_name() {
        let client = StripeClient::new("sk_test_mock_key");
        assert_eq!(client.name(), "Stripe");
    }
}
