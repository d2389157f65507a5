use crate::{domain::RemoteError, service::MayanConfig};
use reqwest::{Method, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Thin wrapper around the Mayan EDMS REST API.
///
/// Paths handed to [`MayanClient::perform_request`] are relative to the
/// configured API root, e.g. `workflow_templates/1/transitions/`.
#[derive(Debug, Clone)]
pub struct MayanClient {
    base_url: String,
    username: Option<String>,
    password: Option<String>,
    /// Retries transient failures, used for idempotent methods only
    client: ClientWithMiddleware,
    /// Single attempt, so a POST the server already applied is never replayed
    once: ClientWithMiddleware,
}

impl MayanClient {
    pub fn new(config: &MayanConfig) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout()))
            .build()
            .map_err(RemoteError::Client)?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries());
        let once = ClientBuilder::new(client.clone()).build();
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            base_url: config.url().trim_end_matches('/').to_string(),
            username: config.username().map(str::to_string),
            password: config.password().map(str::to_string),
            client,
            once,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a request and fails on any non-2xx response.
    #[tracing::instrument(name = "Mayan request", skip(self, body))]
    pub async fn perform_request<B: Serialize>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<Response, RemoteError> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|source| {
                warn!("Failed to encode {} request body for {}: {}", method, path, source);
                RemoteError::Encode {
                    path: path.to_string(),
                    source,
                }
            })?;

        let client = if method.is_idempotent() {
            &self.client
        } else {
            &self.once
        };

        let mut request = client.request(method.clone(), self.url(path));
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_ref());
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        debug!("Sending {} request to {}", method, path);

        let response = request.send().await.map_err(|source| {
            warn!("Failed to send {} request to {}: {}", method, path, source);
            RemoteError::Transport {
                method: method.clone(),
                path: path.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} {} returned {}: {}", method, path, status, body);
            return Err(RemoteError::Status {
                method,
                path: path.to_string(),
                status,
                body,
            });
        }

        Ok(response)
    }

    /// Sends a request and decodes the JSON response body.
    pub async fn perform_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<T, RemoteError> {
        let response = self.perform_request(path, method, body).await?;

        response.json::<T>().await.map_err(|source| {
            warn!("Failed to decode response from {}: {}", path, source);
            RemoteError::Decode {
                path: path.to_string(),
                source,
            }
        })
    }
}
