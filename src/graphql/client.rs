use anyhow::Context;
use async_trait::async_trait;
use graphql_client::{QueryBody, Response};
use log::debug;
use serde_json::Value;

use super::GraphQLTransport;
use crate::config::AppConfig;
use crate::errors::{Error, Result};
use crate::http::RateLimitedClient;

const MAX_ERROR_BODY_CHARS: usize = 500;

/// start.gg GraphQL client
pub struct StartggClient {
    http: RateLimitedClient,
    api_url: String,
    api_token: String,
}

impl StartggClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let settings = &config.startgg;
        let api_token = config.api_token()?.to_string();
        let http = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )
        .context("Failed to create start.gg client")?;

        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
            api_token,
        })
    }
}

#[async_trait]
impl GraphQLTransport for StartggClient {
    async fn execute(&self, body: &QueryBody<Value>) -> Result<Value> {
        debug!("start.gg {} {}", body.operation_name, body.variables);

        let response = self
            .http
            .post_json(&self.api_url, &self.api_token, body)
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Transport {
                status: Some(status.as_u16()),
                message: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let parsed: Response<Value> = response.json().await?;
        into_data(parsed)
    }
}

/// Split a GraphQL response into its data, failing on any reported error
fn into_data(response: Response<Value>) -> Result<Value> {
    let Response { data, errors, .. } = response;
    match (data, errors) {
        (_, Some(errors)) if !errors.is_empty() => Err(Error::GraphQL {
            messages: errors.into_iter().map(|e| e.message).collect(),
        }),
        (Some(data), _) => Ok(data),
        (None, _) => Err(Error::transport(
            "GraphQL response returned neither `data` nor `errors`",
        )),
    }
}
