use crate::{FullPost, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

const WAITLIST_FALLBACK_MESSAGE: &str = "Failed to join waitlist";

/// An API client for the blog content function and the waitlist function.
#[derive(Clone)]
pub struct APIClient {
    /// Endpoint answering `?list=1`, `?latest=1` and `?post=N`.
    pub content_url: String,
    pub waitlist_url: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    async fn content_get(&self, query: &[(&str, String)]) -> ReqwestResult {
        self.inner_client
            .get(&self.content_url)
            .query(query)
            .send()
            .await
    }

    async fn post(&self, url: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client.post(url).json(body).send().await
    }
}

/// Methods on the remote functions
impl APIClient {
    /// Fetch the post list together with one full post.
    ///
    /// A well-formed response with `success: false` or without any posts is
    /// reported as an error so callers only ever see a usable list.
    pub async fn get_post_list(
        &self,
        selection: requests::PostSelection,
    ) -> Result<responses::PostList, ClientError> {
        let response = self.content_get(&selection.list_query()).await?;
        let list: responses::PostList = ok_body(response).await?;

        if !list.success {
            return Err(ClientError::Unsuccessful);
        }
        if list.posts.is_empty() {
            return Err(ClientError::EmptyResult);
        }

        tracing::debug!(
            list_count = list.posts.len(),
            has_post = list.post.is_some(),
            cached = list.cached,
            stale = list.stale,
            "Fetched post list"
        );
        Ok(list)
    }

    /// Fetch one full post by its index in the list.
    pub async fn get_post(&self, index: usize) -> Result<FullPost, ClientError> {
        let response = self.content_get(&[("post", index.to_string())]).await?;
        let single: responses::SinglePost = ok_body(response).await?;

        if !single.success {
            return Err(ClientError::Unsuccessful);
        }
        single.post.ok_or(ClientError::EmptyResult)
    }

    /// Submit a waitlist signup.
    ///
    /// On failure the server's `message` (or `error`) becomes the error text.
    pub async fn join_waitlist(
        &self,
        signup: &requests::WaitlistSignup,
    ) -> Result<(), ClientError> {
        let response = self.post(&self.waitlist_url, signup).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<responses::ErrorMessage>(&text)
            .ok()
            .and_then(responses::ErrorMessage::into_text)
            .unwrap_or_else(|| WAITLIST_FALLBACK_MESSAGE.to_string());
        Err(ClientError::APIError(status, message))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("The content service reported a failure.")]
    Unsuccessful,
    #[error("No posts returned from API")]
    EmptyResult,
    #[error("Unexpected response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let text = ok_text(response).await?;
    Ok(serde_json::from_str::<T>(&text)?)
}

/// Read the body of a successful request as text, or return the status and
/// body as an `APIError`.
pub async fn ok_text(response: reqwest::Response) -> Result<String, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.text().await?)
}
