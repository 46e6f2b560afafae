use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::Mutex;

/// HTTP client with built-in rate limiting.
///
/// The limiter sits behind an async mutex held for the whole request, so
/// callers sharing one client never have two requests in flight.
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: Mutex<RateLimiter>,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = Mutex::new(RateLimiter::new(rate_limit_ms));

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        bearer_token: &str,
        body: &B,
    ) -> reqwest::Result<reqwest::Response> {
        let mut limiter = self.rate_limiter.lock().await;
        limiter.wait().await;
        debug!("Request #{} to {}", limiter.request_count(), url);
        self.client
            .post(url)
            .bearer_auth(bearer_token)
            .json(body)
            .send()
            .await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
