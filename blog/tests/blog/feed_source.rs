use blog::{BlogError, ContentSource, FeedSource, FetchStrategy, Pane, Viewport};
use payloads::requests::PostSelection;
use test_helpers::{MockBehavior, spawn_app};

use crate::controller;

#[tokio::test]
async fn direct_fetch_reads_the_feed() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;
    let source = FeedSource::new(app.feed_url(), reqwest::Client::new());

    let listing = source.fetch_list(PostSelection::Latest).await?;
    assert_eq!(listing.posts.len(), 3);
    assert_eq!(listing.posts[1].title, "Post number 1");
    assert_eq!(listing.posts[0].author.as_deref(), Some("Jane Doe"));
    // the feed summary is too short, so the first paragraph stands in
    assert_eq!(listing.posts[0].excerpt, "First paragraph of post 0.");
    let latest = listing.post.unwrap();
    assert!(latest.full_content.unwrap().contains("First paragraph of post 0."));

    assert!(app.requests_to("/proxy").is_empty());
    Ok(())
}

#[tokio::test]
async fn falls_back_to_the_proxy_with_encoded_feed_url() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior {
        feed_status: 503,
        ..MockBehavior::default()
    })
    .await;
    let source =
        FeedSource::new(app.feed_url(), reqwest::Client::new()).with_proxy(app.proxy_url());

    let listing = source.fetch_list(PostSelection::Index(2)).await?;
    assert_eq!(listing.posts.len(), 3);
    assert_eq!(listing.post.unwrap().post.title, "Post number 2");

    assert_eq!(app.requests_to("/feed.xml").len(), 1);
    let proxied = app.requests_to("/proxy");
    assert_eq!(proxied.len(), 1);
    let encoded = format!("url=http%3A%2F%2F127.0.0.1%3A{}%2Ffeed.xml", app.port);
    assert_eq!(proxied[0].query, encoded);
    Ok(())
}

#[tokio::test]
async fn unreachable_feed_falls_back_to_proxy() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;
    let source = FeedSource::new(app.unreachable_url(), reqwest::Client::new())
        .with_proxy(app.proxy_url());

    let listing = source.fetch_list(PostSelection::Latest).await?;
    assert_eq!(listing.posts.len(), 3);
    let proxied = app.requests_to("/proxy");
    assert_eq!(proxied.len(), 1);
    assert_eq!(proxied[0].query, "url=http%3A%2F%2F127.0.0.1%3A9%2Ffeed.xml");
    Ok(())
}

#[tokio::test]
async fn every_strategy_failing_reports_the_last_error() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior {
        feed_status: 500,
        proxy_status: 502,
        ..MockBehavior::default()
    })
    .await;
    let source = FeedSource::new(app.feed_url(), reqwest::Client::new())
        .with_strategies(vec![
            FetchStrategy::Direct,
            FetchStrategy::Proxied {
                proxy_url: app.proxy_url(),
            },
        ]);

    match source.fetch_post(0).await {
        Err(BlogError::Transport(message)) => assert!(message.contains("502"), "{message}"),
        other => panic!("expected a transport error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn malformed_feed_is_a_parse_error() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior {
        feed_body: Some("<rss><channel><item><title>cut off".into()),
        ..MockBehavior::default()
    })
    .await;
    let source = FeedSource::new(app.feed_url(), reqwest::Client::new());

    assert!(matches!(
        source.fetch_list(PostSelection::Latest).await,
        Err(BlogError::Parse(_))
    ));
    Ok(())
}

#[tokio::test]
async fn empty_feed_is_an_empty_result() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::with_posts(Vec::new())).await;
    let source = FeedSource::new(app.feed_url(), reqwest::Client::new());

    assert!(matches!(
        source.fetch_list(PostSelection::Latest).await,
        Err(BlogError::EmptyResult)
    ));
    Ok(())
}

#[tokio::test]
async fn blog_page_works_from_the_feed() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;
    let source = FeedSource::new(app.feed_url(), reqwest::Client::new());
    let mut blog = controller(Viewport::Wide);

    blog.load(&source, "").await;
    blog.navigate(&source, "#post-1").await;

    let Pane::Post(view) = &blog.screen().main else {
        panic!("expected post 1");
    };
    assert_eq!(view.title, "Post number 1");
    assert_eq!(view.meta.date, "December 31, 2024");
    Ok(())
}
