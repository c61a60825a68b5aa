use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Session handle passed to every API call.
///
/// A connection is never mutated: [`Connection::authorized`] returns a new
/// handle carrying another actor's bearer token, so scenarios running in
/// parallel cannot observe each other's credentials. The underlying HTTP
/// client is shared between clones.
#[derive(Debug, Clone)]
pub struct Connection {
    http: reqwest::Client,
    base_url: Url,
    access_token: Option<String>,
}

impl Connection {
    /// Create an anonymous connection with the default request timeout.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
            access_token: None,
        })
    }

    /// Same backend, acting as the holder of `access_token`.
    pub fn authorized(&self, access_token: &str) -> Self {
        Self {
            access_token: Some(access_token.to_string()),
            ..self.clone()
        }
    }

    /// Same backend, no credential.
    pub fn anonymous(&self) -> Self {
        Self {
            access_token: None,
            ..self.clone()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ApiError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                source,
            })
    }

    async fn request<B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let mut request = self.http.request(method.clone(), url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, path, authenticated = self.is_authenticated(), "sending request");
        let response = request.send().await.map_err(|source| ApiError::Transport {
            method: method.clone(),
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|source| ApiError::Transport {
            method: method.clone(),
            path: path.to_string(),
            source,
        })?;
        debug!(%method, path, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                path: path.to_string(),
                status,
                body: text,
            });
        }
        Ok(text)
    }

    async fn call<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.request(method.clone(), path, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode {
            method,
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.call(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::PUT, path, Some(body)).await
    }

    /// `PATCH` on a collection is the paginated search of that collection.
    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::PATCH, path, Some(body)).await
    }

    /// Soft deletes answer without a body.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request(Method::DELETE, path, None::<&()>)
            .await
            .map(|_| ())
    }
}

fn parse_base_url(base_url: &str) -> ApiResult<Url> {
    // Url::join drops the last segment unless the base ends with a slash.
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };
    Url::parse(&normalized).map_err(|source| ApiError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })
}
