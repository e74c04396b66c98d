use crate::feed::FeedError;
use payloads::ClientError;

/// Why posts could not be loaded. Every variant ends up as the page-level
/// error panel; the detail is for logs.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("Could not reach the content source: {0}")]
    Transport(String),
    #[error("No posts returned")]
    EmptyResult,
    #[error("Could not read the content: {0}")]
    Parse(String),
}

impl From<ClientError> for BlogError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::EmptyResult => BlogError::EmptyResult,
            ClientError::Parse(e) => BlogError::Parse(e.to_string()),
            other => BlogError::Transport(other.to_string()),
        }
    }
}

impl From<FeedError> for BlogError {
    fn from(error: FeedError) -> Self {
        BlogError::Parse(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn client_errors_map_onto_blog_errors() {
        let api = ClientError::APIError(StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert!(matches!(BlogError::from(api), BlogError::Transport(m) if m == "boom"));
        assert!(matches!(
            BlogError::from(ClientError::Unsuccessful),
            BlogError::Transport(_)
        ));
        assert!(matches!(
            BlogError::from(ClientError::EmptyResult),
            BlogError::EmptyResult
        ));
    }
}
