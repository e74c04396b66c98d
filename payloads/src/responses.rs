use serde::{Deserialize, Serialize};

use crate::{FullPost, Post};

/// Response to `?list=1[&latest=1|&post=N]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostList {
    pub success: bool,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub post: Option<FullPost>,
    /// Whether the function answered from its own cache.
    #[serde(default)]
    pub cached: bool,
    /// Whether the cached answer was past its freshness window.
    #[serde(default)]
    pub stale: bool,
}

/// Response to `?post=N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinglePost {
    pub success: bool,
    #[serde(default)]
    pub post: Option<FullPost>,
}

/// Error body returned by the waitlist function. Either field may carry the
/// human readable reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorMessage {
    pub fn into_text(self) -> Option<String> {
        self.message.or(self.error)
    }
}

/// Envelope used by the CORS relay: the relayed body is a string in
/// `contents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyEnvelope {
    pub contents: Option<String>,
}
