//! Types shared between the site and the remote content, feed and waitlist
//! endpoints, plus the HTTP client that speaks to them.

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use serde::{Deserialize, Serialize};

/// A blog post as it appears in the post list.
///
/// Posts carry no stable identifier; they are addressed by their position in
/// the list returned by the content API, with index 0 being the latest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub link: String,
    /// Publication date as sent by the source (RFC 3339 or RFC 2822).
    pub date: String,
    /// Plain text summary, already truncated by the source.
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A post including its HTML body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullPost {
    #[serde(flatten)]
    pub post: Post,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
    /// Set once `full_content` has been run through the sanitizer, so repeat
    /// renders reuse the stored result.
    #[serde(skip)]
    pub sanitized: bool,
}

impl FullPost {
    pub fn new(post: Post, full_content: Option<String>) -> Self {
        Self {
            post,
            full_content,
            sanitized: false,
        }
    }
}

impl From<FullPost> for Post {
    fn from(full: FullPost) -> Self {
        full.post
    }
}
