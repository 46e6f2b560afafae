mod client;
pub mod models;
pub mod queries;

pub use client::StartggClient;
pub use queries::Operation;

use async_trait::async_trait;
use graphql_client::QueryBody;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{Error, Result};

/// Sends one GraphQL document and hands back its `data` object.
///
/// Implementations turn non-2xx responses and network failures into
/// [`Error::Transport`] and a non-empty `errors` array into [`Error::GraphQL`].
#[async_trait]
pub trait GraphQLTransport: Send + Sync {
    async fn execute(&self, body: &QueryBody<Value>) -> Result<Value>;
}

/// Run `operation` and decode its `data` into `T`
pub async fn query<T: DeserializeOwned>(
    transport: &dyn GraphQLTransport,
    operation: &Operation,
    variables: Value,
) -> Result<T> {
    let body = QueryBody {
        variables,
        query: operation.document,
        operation_name: operation.name,
    };
    let data = transport.execute(&body).await?;
    serde_json::from_value(data).map_err(|e| {
        Error::transport(format!("unexpected {} response shape: {}", operation.name, e))
    })
}
