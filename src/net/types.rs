//! Wire DTOs for the tweet backend's REST surface.
//!
//! DESIGN
//! ======
//! The backend embeds authors, likes, retweets, and comments inside each
//! tweet. Identifiers may arrive as JSON numbers or strings depending on the
//! backend's ORM, so they are normalized to `String` on the way in. Missing
//! collections decode as empty.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A user reference embedded in tweets, likes, retweets, and comments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Backend user identifier.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    /// Login name; the key used to recognize the current user.
    pub username: String,
}

/// A short text post with its relationship collections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    /// Backend tweet identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Author of the tweet.
    #[serde(default)]
    pub user: Option<UserRef>,
    /// Post body.
    pub content: String,
    /// Creation timestamp as sent by the backend (RFC 3339).
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub retweets: Vec<Retweet>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A like record linking a user to a tweet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserRef>,
}

/// A retweet record linking a user to a tweet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retweet {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserRef>,
}

/// A text reply attached to a tweet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserRef>,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// Anything that records which user performed it.
pub trait Authored {
    fn author(&self) -> Option<&UserRef>;

    /// Whether `username` is the recorded author.
    fn is_by(&self, username: &str) -> bool {
        self.author().is_some_and(|user| user.username == username)
    }
}

impl Authored for Tweet {
    fn author(&self) -> Option<&UserRef> {
        self.user.as_ref()
    }
}

impl Authored for Like {
    fn author(&self) -> Option<&UserRef> {
        self.user.as_ref()
    }
}

impl Authored for Retweet {
    fn author(&self) -> Option<&UserRef> {
        self.user.as_ref()
    }
}

impl Authored for Comment {
    fn author(&self) -> Option<&UserRef> {
        self.user.as_ref()
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Body shared by tweet and comment create/update calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentBody {
    pub content: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number identifier")),
    }
}
