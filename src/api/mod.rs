//! Backend HTTP Client
//!
//! gloo-net implementation of the core API traits, organized by resource.

mod auth;
mod projects;
mod tasks;

use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use kanbanflow_core::api::{check_status, Endpoint, HttpMethod, TokenStore};
use kanbanflow_core::{ApiError, ApiResult};

use crate::config::AppConfig;
use crate::storage::{BrowserNavigator, LocalTokenStore};

/// JSON client for the KanbanFlow REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    tokens: LocalTokenStore,
    navigator: BrowserNavigator,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            tokens: LocalTokenStore::new(config.token_key),
            navigator: BrowserNavigator,
        }
    }

    pub fn tokens(&self) -> &LocalTokenStore {
        &self.tokens
    }

    /// Request with JSON content type and the bearer token when one is stored
    fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);
        let builder = match endpoint.method() {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        let builder = builder.header("Content-Type", "application/json");
        match self.tokens.get() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send and return the body of a successful response
    async fn send(&self, endpoint: Endpoint, request: Request) -> ApiResult<String> {
        log::debug!("[API] {} {}", endpoint.method().as_str(), endpoint.path());
        let response = request.send().await.map_err(network_error)?;
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;

        if let Err(e) = check_status(status, &body, &self.tokens, &self.navigator) {
            log::error!("[API] {} {} failed: {}", endpoint.method().as_str(), endpoint.path(), e);
            return Err(e);
        }
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let request = self.request(endpoint).build().map_err(network_error)?;
        let body = self.send(endpoint, request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn submit<B, T>(&self, endpoint: Endpoint, payload: &B) -> ApiResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self.request(endpoint).json(payload).map_err(network_error)?;
        let body = self.send(endpoint, request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// For endpoints whose response body is ignored
    async fn execute(&self, endpoint: Endpoint) -> ApiResult<()> {
        let request = self.request(endpoint).build().map_err(network_error)?;
        self.send(endpoint, request).await.map(|_| ())
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}
