use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use time::Duration;
use url::Url;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Root of the ResQ-X REST API (e.g., "https://api.resqx.net/v1/").
    pub api_base_url: Url,
    /// Static dashboard key sent as `x-resqx-key` on every outbound request.
    pub api_key: SecretString,
    /// Lifetime of the `signup_email` cookie.
    pub signup_email_ttl: Duration,
    /// Set the `Secure` cookie flag. Only disable for plain-HTTP local development.
    pub cookie_secure: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let api_base_url: Url = get_env("RESQX_API_BASE_URL");
        let api_key: SecretString = SecretString::new(get_env::<String>("RESQX_API_KEY").into());

        let signup_email_ttl_secs: i64 = get_env_default("SIGNUP_EMAIL_TTL_SECS", 600);
        let cookie_secure: bool = get_env_default("COOKIE_SECURE", true);

        Self {
            bind_addr,
            cors_origin,
            api_base_url,
            api_key,
            signup_email_ttl: Duration::seconds(signup_email_ttl_secs),
            cookie_secure,
        }
    }
}
