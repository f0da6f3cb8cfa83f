//! Server Configuration

use checkout_payments::RedirectUrls;

/// Listen address when `BIND_ADDR` is unset
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Checkout landing pages
    pub redirect_urls: RedirectUrls,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            redirect_urls: RedirectUrls::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            redirect_urls: RedirectUrls::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.redirect_urls.success_url.ends_with("/success"));
        assert!(config.redirect_urls.cancel_url.ends_with("/cancel"));
    }
}
