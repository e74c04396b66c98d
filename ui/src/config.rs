//! Build-time site configuration.
//!
//! Values come from environment variables read by `option_env!` when the
//! wasm bundle is built, e.g. `CONTENT_SOURCE=rss trunk build`.

use blog::{ApiSource, BlogError, ContentSource, FeedSource, PostListing};
use derive_more::Display;
use payloads::requests::PostSelection;
use payloads::{APIClient, FullPost};

pub const DEFAULT_CONTENT_API_URL: &str = "https://getblogposts-eyyuwkjlza-uc.a.run.app";
pub const DEFAULT_WAITLIST_URL: &str =
    "https://us-central1-spark-website-waitlist-d1cf5.cloudfunctions.net/subscribeToWaitlist";
pub const DEFAULT_FEED_URL: &str = "/feed.xml";
pub const DEFAULT_FEED_PROXY_URL: &str = "https://api.allorigins.win/get";

/// Which backend the blog reads posts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum SourceKind {
    #[default]
    #[display("api")]
    Api,
    #[display("rss")]
    Rss,
}

impl SourceKind {
    /// Unknown values fall back to the content API.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("rss") | Some("feed") => SourceKind::Rss,
            _ => SourceKind::Api,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub content_api_url: String,
    pub feed_url: String,
    /// Relay tried after a direct feed fetch fails. Empty disables it.
    pub feed_proxy_url: Option<String>,
    pub waitlist_url: String,
    pub content_source: SourceKind,
    /// Prefix for site links. `None` derives it from the page location.
    pub base_path: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None, None, None)
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("CONTENT_API_URL"),
            option_env!("FEED_URL"),
            option_env!("FEED_PROXY_URL"),
            option_env!("WAITLIST_URL"),
            option_env!("CONTENT_SOURCE"),
            option_env!("BASE_PATH"),
        )
    }

    pub fn from_values(
        content_api_url: Option<&str>,
        feed_url: Option<&str>,
        feed_proxy_url: Option<&str>,
        waitlist_url: Option<&str>,
        content_source: Option<&str>,
        base_path: Option<&str>,
    ) -> Self {
        let feed_proxy_url = match feed_proxy_url {
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url.to_string()),
            None => Some(DEFAULT_FEED_PROXY_URL.to_string()),
        };
        Self {
            content_api_url: content_api_url
                .unwrap_or(DEFAULT_CONTENT_API_URL)
                .to_string(),
            feed_url: feed_url.unwrap_or(DEFAULT_FEED_URL).to_string(),
            feed_proxy_url,
            waitlist_url: waitlist_url.unwrap_or(DEFAULT_WAITLIST_URL).to_string(),
            content_source: SourceKind::parse(content_source),
            base_path: base_path.map(|p| p.trim_end_matches('/').to_string()),
        }
    }

    pub fn api_client(&self) -> APIClient {
        APIClient {
            content_url: self.content_api_url.clone(),
            waitlist_url: self.waitlist_url.clone(),
            inner_client: reqwest::Client::new(),
        }
    }

    /// The configured backend, with a path-only feed URL resolved against
    /// the page origin.
    pub fn content_source(&self) -> SiteSource {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        self.content_source_at(origin.as_deref())
    }

    pub fn content_source_at(&self, origin: Option<&str>) -> SiteSource {
        match self.content_source {
            SourceKind::Api => SiteSource::Api(ApiSource::new(self.api_client())),
            SourceKind::Rss => {
                let feed_url = absolute_url(&self.feed_url, origin);
                let source = FeedSource::new(&feed_url, reqwest::Client::new());
                SiteSource::Feed(match &self.feed_proxy_url {
                    Some(proxy) => source.with_proxy(proxy),
                    None => source,
                })
            }
        }
    }
}

/// `url` unchanged if it has a scheme, otherwise joined onto `origin`.
pub fn absolute_url(url: &str, origin: Option<&str>) -> String {
    if url.contains("://") {
        return url.to_string();
    }
    match origin {
        Some(origin) => format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            url.trim_start_matches('/')
        ),
        None => url.to_string(),
    }
}

/// The configured blog backend.
#[derive(Clone)]
pub enum SiteSource {
    Api(ApiSource),
    Feed(FeedSource),
}

impl ContentSource for SiteSource {
    async fn fetch_list(&self, selection: PostSelection) -> Result<PostListing, BlogError> {
        match self {
            SiteSource::Api(source) => source.fetch_list(selection).await,
            SiteSource::Feed(source) => source.fetch_list(selection).await,
        }
    }

    async fn fetch_post(&self, index: usize) -> Result<FullPost, BlogError> {
        match self {
            SiteSource::Api(source) => source.fetch_post(index).await,
            SiteSource::Feed(source) => source.fetch_post(index).await,
        }
    }
}
