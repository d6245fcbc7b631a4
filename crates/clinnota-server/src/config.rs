//! Server configuration
//!
//! Read from the environment (and `.env` via dotenvy in `main`).

use std::path::PathBuf;

/// Relay configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Public URL of the web frontend, used for Stripe redirects
    pub app_url: String,

    /// Directory holding the built frontend
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3001,
            app_url: "http://localhost:3000".into(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("BIND_HOST").unwrap_or(defaults.host);
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let app_url = std::env::var("APP_URL").unwrap_or(defaults.app_url);
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Self {
            host,
            port,
            app_url,
            static_dir,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Stripe replaces `{CHECKOUT_SESSION_ID}` before redirecting
    pub fn success_url(&self) -> String {
        format!(
            "{}/success?session_id={{CHECKOUT_SESSION_ID}}",
            self.app_url.trim_end_matches('/')
        )
    }

    pub fn cancel_url(&self) -> String {
        format!("{}/checkout", self.app_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_redirect_urls() {
        let config = ServerConfig::default();
        assert_eq!(
            config.success_url(),
            "http://localhost:3000/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(config.cancel_url(), "http://localhost:3000/checkout");
        assert_eq!(config.bind_addr(), "0.0.0.0:3001");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ServerConfig {
            app_url: "https://clinnota.com.br/".into(),
            ..Default::default()
        };
        assert_eq!(config.cancel_url(), "https://clinnota.com.br/checkout");
    }
}
