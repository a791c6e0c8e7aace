use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client so every LLM provider reuses one connection pool
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(30)))
                .tcp_nodelay(true)
                .build()
                .unwrap_or_default()
        })
        .clone()
}
