//! Shared HTTP transport.
//!
//! One configured `reqwest` client for the whole layer. Outgoing requests
//! get the bearer token attached when one exists; responses are unwrapped
//! to their body payload on success and coerced to [`ApiError`] on any
//! failure. Callers never see status codes or headers on success, and
//! never see a raw transport error on failure.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use padron_core::ApiError;

use crate::config::ClientConfig;
use crate::token::TokenSource;

pub struct Http {
    client: reqwest::Client,
    base_url: String,
    token: Arc<dyn TokenSource>,
}

impl Http {
    pub fn new(config: &ClientConfig, token: Arc<dyn TokenSource>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("client builds from static options");

        Self {
            client,
            base_url: config.base_url.clone(),
            token,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::GET, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, Some(encode(body)?)).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::POST, path, None).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PUT, path, Some(encode(body)?)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::DELETE, path, None).await
    }

    pub async fn delete_with_body<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::DELETE, path, Some(encode(body)?)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(token) = self.token.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, "sending request");

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(|err| decode_error(status, err))
        } else {
            let body: Option<Value> = serde_json::from_slice(&bytes).ok();
            let err = ApiError::from_status(
                status.as_u16(),
                format!("request failed with status {}", status.as_u16()),
                body,
            );
            tracing::debug!(status = status.as_u16(), message = %err.message, "request rejected");
            Err(err)
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|err| ApiError::transport("request", format!("failed to encode request body: {err}")))
}

/// Classify a failure that produced no HTTP response.
fn transport_error(err: reqwest::Error) -> ApiError {
    let code = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else if err.is_decode() {
        "decode"
    } else {
        "request"
    };
    tracing::debug!(code, %err, "transport failure");
    ApiError::transport(code, err.to_string())
}

/// A 2xx response whose body did not match the expected shape.
fn decode_error(status: StatusCode, err: serde_json::Error) -> ApiError {
    let mut out = ApiError::transport("decode", format!("failed to decode response body: {err}"));
    out.status_code = Some(status.as_u16());
    out
}
