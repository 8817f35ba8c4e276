//! REST client for the tweet backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): network operations return `ApiError::Unavailable`
//! so request planning and URL building stay testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls are one-shot: no retry, backoff, or caching. Every failure is handed
//! back to the caller as an `ApiError`, which pages reduce to a notification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ContentBody, LoginRequest, RegisterRequest, Tweet};

/// HTTP verbs used by the backend surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A single mutating call against the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiRequest {
    CreateTweet { content: String },
    DeleteTweet { tweet_id: String },
    Like { tweet_id: String },
    Unlike { like_id: String },
    Retweet { tweet_id: String },
    Unretweet { retweet_id: String },
    CreateComment { tweet_id: String, content: String },
    UpdateComment { comment_id: String, content: String },
    DeleteComment { comment_id: String },
}

impl ApiRequest {
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::CreateTweet { .. } | Self::Like { .. } | Self::Retweet { .. } | Self::CreateComment { .. } => {
                HttpMethod::Post
            }
            Self::UpdateComment { .. } => HttpMethod::Put,
            Self::DeleteTweet { .. } | Self::Unlike { .. } | Self::Unretweet { .. } | Self::DeleteComment { .. } => {
                HttpMethod::Delete
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::CreateTweet { .. } => "/tweet".to_owned(),
            Self::DeleteTweet { tweet_id } => format!("/tweet/{tweet_id}"),
            Self::Like { tweet_id } => format!("/like/{tweet_id}"),
            Self::Unlike { like_id } => format!("/like/{like_id}"),
            Self::Retweet { tweet_id } => format!("/retweet/{tweet_id}"),
            Self::Unretweet { retweet_id } => format!("/retweet/{retweet_id}"),
            Self::CreateComment { tweet_id, .. } => format!("/comment/{tweet_id}"),
            Self::UpdateComment { comment_id, .. } | Self::DeleteComment { comment_id } => {
                format!("/comment/{comment_id}")
            }
        }
    }

    /// JSON body for calls that carry text content.
    pub fn body(&self) -> Option<ContentBody> {
        match self {
            Self::CreateTweet { content }
            | Self::CreateComment { content, .. }
            | Self::UpdateComment { content, .. } => Some(ContentBody { content: content.clone() }),
            _ => None,
        }
    }
}

/// Request client bound to a base address and an optional bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Anonymous client for `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), token: None }
    }

    /// Attach the session token sent as `Authorization: Bearer <token>`.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Absolute URL for a backend path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Value of the `Authorization` header, when authenticated.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// Create an account via `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the backend rejects it.
    pub async fn register(&self, body: &RegisterRequest) -> Result<(), ApiError> {
        self.execute(HttpMethod::Post, "/auth/register", Some(to_json(body)?)).await?;
        Ok(())
    }

    /// Exchange credentials for a session token via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails, the backend rejects the
    /// credentials, or the success body carries no token.
    pub async fn login(&self, body: &LoginRequest) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.execute(HttpMethod::Post, "/auth/login", Some(to_json(body)?)).await?;
            let body: super::types::LoginResponse =
                resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            token_from_login(body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch every tweet via `GET /tweet`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the body is not a tweet list.
    pub async fn fetch_tweets(&self) -> Result<Vec<Tweet>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.execute(HttpMethod::Get, "/tweet", None).await?;
            resp.json::<Vec<Tweet>>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Post a new tweet via `POST /tweet`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the backend rejects it.
    pub async fn create_tweet(&self, content: &str) -> Result<(), ApiError> {
        self.send(&ApiRequest::CreateTweet { content: content.to_owned() }).await
    }

    /// Execute one mutating call. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the backend rejects it.
    pub async fn send(&self, request: &ApiRequest) -> Result<(), ApiError> {
        let body = request.body().as_ref().map(to_json).transpose()?;
        self.execute(request.method(), &request.path(), body).await?;
        Ok(())
    }

    #[cfg(feature = "csr")]
    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let url = self.url(path);
        let mut builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        if let Some(auth) = self.authorization() {
            builder = builder.header("Authorization", &auth);
        }
        let request = match body {
            Some(json) => builder.json(&json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Decode(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            log::warn!("{method:?} {path} failed: {status}");
            return Err(ApiError::from_status(status, &text));
        }
        Ok(resp)
    }

    #[cfg(not(feature = "csr"))]
    async fn execute(&self, method: HttpMethod, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

fn to_json<T: serde::Serialize>(body: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "csr"))]
fn token_from_login(body: super::types::LoginResponse) -> Result<String, ApiError> {
    body.token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Decode("login response is missing a token".to_owned()))
}
