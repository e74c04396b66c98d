use serde::{Deserialize, Serialize};

/// Which full post to ask for alongside the post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSelection {
    Latest,
    Index(usize),
}

impl PostSelection {
    /// Index 0 is the latest post, so it is requested as `latest=1`.
    pub fn from_index(index: Option<usize>) -> Self {
        match index {
            Some(index) if index > 0 => Self::Index(index),
            _ => Self::Latest,
        }
    }

    /// Index of the post this selection resolves to in the list.
    pub fn index(&self) -> usize {
        match self {
            Self::Latest => 0,
            Self::Index(index) => *index,
        }
    }

    /// Query parameters for a list request.
    pub fn list_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("list", "1".to_string())];
        match self {
            Self::Latest => query.push(("latest", "1".to_string())),
            Self::Index(index) => query.push(("post", index.to_string())),
        }
        query
    }
}

/// Body of a waitlist signup. Only `email` is required; the remaining fields
/// are collected by the later steps of the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistSignup {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_channel_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}
