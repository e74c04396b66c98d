//! Where posts come from: the content API or an RSS feed.

use crate::error::BlogError;
use crate::feed::parse_feed;
use payloads::api_client::{ok_body, ok_text};
use payloads::requests::PostSelection;
use payloads::{APIClient, ClientError, FullPost, Post, responses};

/// The ordered post list plus, when the source has it at hand, the full
/// post for the requested selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PostListing {
    pub posts: Vec<Post>,
    pub post: Option<FullPost>,
}

#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn fetch_list(&self, selection: PostSelection) -> Result<PostListing, BlogError>;
    async fn fetch_post(&self, index: usize) -> Result<FullPost, BlogError>;
}

/// Posts from the JSON content API.
#[derive(Clone)]
pub struct ApiSource {
    client: APIClient,
}

impl ApiSource {
    pub fn new(client: APIClient) -> Self {
        Self { client }
    }
}

impl ContentSource for ApiSource {
    async fn fetch_list(&self, selection: PostSelection) -> Result<PostListing, BlogError> {
        let list = self.client.get_post_list(selection).await?;
        Ok(PostListing {
            posts: list.posts,
            post: list.post,
        })
    }

    async fn fetch_post(&self, index: usize) -> Result<FullPost, BlogError> {
        Ok(self.client.get_post(index).await?)
    }
}

/// One way of retrieving the feed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStrategy {
    Direct,
    /// Through a CORS relay answering `GET <proxy_url>?url=<feed>` with
    /// `{"contents": "<xml>"}`.
    Proxied { proxy_url: String },
}

/// Posts from an RSS feed. Strategies are tried in order, once each; the
/// first document retrieved wins.
#[derive(Clone)]
pub struct FeedSource {
    feed_url: String,
    strategies: Vec<FetchStrategy>,
    client: reqwest::Client,
}

impl FeedSource {
    pub fn new(feed_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            feed_url: feed_url.into(),
            strategies: vec![FetchStrategy::Direct],
            client,
        }
    }

    /// Add a relay to fall back on after the strategies already configured.
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.strategies.push(FetchStrategy::Proxied {
            proxy_url: proxy_url.into(),
        });
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<FetchStrategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    pub fn strategies(&self) -> &[FetchStrategy] {
        &self.strategies
    }

    pub async fn fetch_document(&self) -> Result<String, BlogError> {
        let mut last_error = None;
        for strategy in &self.strategies {
            match self.fetch_with(strategy).await {
                Ok(document) => return Ok(document),
                Err(error) => {
                    tracing::warn!(?strategy, %error, "Feed fetch failed");
                    last_error = Some(error);
                }
            }
        }
        Err(last_error
            .unwrap_or_else(|| BlogError::Transport("no feed fetch strategy configured".into())))
    }

    async fn fetch_with(&self, strategy: &FetchStrategy) -> Result<String, BlogError> {
        match strategy {
            FetchStrategy::Direct => {
                let response = self
                    .client
                    .get(&self.feed_url)
                    .send()
                    .await
                    .map_err(ClientError::from)?;
                Ok(ok_text(response).await?)
            }
            FetchStrategy::Proxied { proxy_url } => {
                let response = self
                    .client
                    .get(proxy_url)
                    .query(&[("url", self.feed_url.as_str())])
                    .send()
                    .await
                    .map_err(ClientError::from)?;
                let envelope: responses::ProxyEnvelope = ok_body(response).await?;
                envelope
                    .contents
                    .filter(|contents| !contents.trim().is_empty())
                    .ok_or_else(|| BlogError::Transport("relay returned no contents".into()))
            }
        }
    }

    async fn fetch_posts(&self) -> Result<Vec<FullPost>, BlogError> {
        let document = self.fetch_document().await?;
        let posts = parse_feed(&document)?;
        if posts.is_empty() {
            return Err(BlogError::EmptyResult);
        }
        Ok(posts)
    }
}

impl ContentSource for FeedSource {
    async fn fetch_list(&self, selection: PostSelection) -> Result<PostListing, BlogError> {
        let full_posts = self.fetch_posts().await?;
        let posts = full_posts.iter().map(|p| p.post.clone()).collect();
        Ok(PostListing {
            posts,
            post: full_posts.into_iter().nth(selection.index()),
        })
    }

    async fn fetch_post(&self, index: usize) -> Result<FullPost, BlogError> {
        self.fetch_posts()
            .await?
            .into_iter()
            .nth(index)
            .ok_or(BlogError::EmptyResult)
    }
}
