//! reqwest-backed [`PostApi`] adapter.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode};
use uuid::Uuid;

use wall_shared::ErrorBody;
use wall_shared::dto::{CreatePostRequest, Post, UpdatePostRequest};

use crate::api::{ApiError, PostApi};

/// Default per-request timeout. A hung request must resolve eventually so
/// the store's loading flags cannot stay stuck.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP adapter for a running Wailing Wall API server.
pub struct HttpPostApi {
    client: Client,
    base_url: String,
}

impl HttpPostApi {
    /// Build an adapter for `base_url` with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn list(
        &self,
        page: u64,
        limit: u64,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Post>, ApiError> {
        let mut request = self.client.get(self.url("/posts")).query(&[
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ]);

        if let Some(day) = date {
            request = request.query(&[("date", day.format("%Y-%m-%d").to_string())]);
        }

        let response = request.send().await.map_err(transport)?;
        decode(response).await
    }

    async fn create(&self, content: &str, author: Option<&str>) -> Result<Post, ApiError> {
        let body = CreatePostRequest {
            content: content.to_owned(),
            author: author.map(str::to_owned),
        };

        let response = self
            .client
            .post(self.url("/posts"))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        decode(response).await
    }

    async fn increment_click(&self, id: Uuid) -> Result<Post, ApiError> {
        let response = self
            .client
            .patch(self.url(&format!("/posts/{id}")))
            .send()
            .await
            .map_err(transport)?;

        decode(response).await
    }

    async fn update(&self, id: Uuid, content: &str) -> Result<Post, ApiError> {
        let body = UpdatePostRequest {
            content: content.to_owned(),
        };

        let response = self
            .client
            .put(self.url(&format!("/posts/{id}")))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        decode(response).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/posts/{id}")))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        Ok(())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status, response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// The server's failure payload is `{"error": ...}`; fall back to the bare
/// status text when the body is something else.
async fn status_error(status: StatusCode, response: Response) -> ApiError {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_owned(),
    };

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
