//! Application State

use std::sync::Arc;

use checkout_payments::{Catalog, CheckoutGateway, RedirectUrls};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Plan/option → price ID table
    pub catalog: Arc<Catalog>,

    /// Session creator (Stripe in production)
    pub gateway: Arc<dyn CheckoutGateway>,

    /// Success / cancel landing pages
    pub redirect_urls: Arc<RedirectUrls>,
}

impl AppState {
    pub fn new(catalog: Catalog, gateway: Arc<dyn CheckoutGateway>, redirect_urls: RedirectUrls) -> Self {
        Self {
            catalog: Arc::new(catalog),
            gateway,
            redirect_urls: Arc::new(redirect_urls),
        }
    }
}
