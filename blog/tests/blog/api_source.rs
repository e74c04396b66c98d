use blog::{ApiSource, ContentSource, DetailBody, Pane, Viewport};
use payloads::requests::PostSelection;
use test_helpers::{MockBehavior, spawn_app};

use crate::controller;

#[tokio::test]
async fn three_posts_render_latest_without_extra_fetch() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;
    let source = ApiSource::new(app.client.clone());
    let mut blog = controller(Viewport::Wide);

    blog.load(&source, "").await;

    let screen = blog.screen();
    assert!(screen.content_visible);
    assert!(!screen.error_visible);
    let Pane::Post(latest) = &screen.main else {
        panic!("expected the latest post, got {:?}", screen.main);
    };
    assert_eq!(latest.title, "Post number 0");
    assert_eq!(latest.meta.date, "January 1, 2025");
    assert_eq!(latest.meta.elapsed, "Just now");
    assert_eq!(latest.meta.author.as_deref(), Some("Jane Doe"));

    let sidebar = screen.sidebar.as_ref().unwrap();
    assert_eq!(sidebar.items.len(), 3);
    assert_eq!(sidebar.items[2].meta.elapsed, "2 days ago");
    assert_eq!(screen.mobile_list.as_ref().unwrap().items.len(), 3);

    let requests = app.requests_to("/content");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query, "list=1&latest=1");
    Ok(())
}

#[tokio::test]
async fn latest_post_is_sanitized_before_display() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;
    let mut blog = controller(Viewport::Wide);
    blog.load(&ApiSource::new(app.client.clone()), "").await;

    let Pane::Post(latest) = &blog.screen().main else {
        panic!("expected a post");
    };
    let DetailBody::Html(body) = &latest.body else {
        panic!("expected html body");
    };
    assert!(body.starts_with("<p>First paragraph of post 0.</p>"));
    assert!(body.contains("<blockquote>"));
    for removed in ["<h1", "<h2", "<script", "<style", "profile_picture", "sharer", "style="] {
        assert!(!body.contains(removed), "{removed} left in {body}");
    }
    Ok(())
}

#[tokio::test]
async fn unsuccessful_response_shows_error_panel() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior {
        success: false,
        ..MockBehavior::default()
    })
    .await;
    let mut blog = controller(Viewport::Wide);
    blog.load(&ApiSource::new(app.client.clone()), "").await;

    let screen = blog.screen();
    assert!(screen.error_visible);
    assert!(!screen.loading_visible);
    assert!(!screen.content_visible);
    Ok(())
}

#[tokio::test]
async fn server_error_shows_error_panel() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior {
        list_status: 500,
        ..MockBehavior::default()
    })
    .await;
    let mut blog = controller(Viewport::Wide);
    blog.load(&ApiSource::new(app.client.clone()), "").await;

    assert!(blog.screen().error_visible);
    assert!(blog.screen().sidebar.is_none());
    Ok(())
}

#[tokio::test]
async fn hash_on_load_requests_that_post_with_the_list() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;
    let mut blog = controller(Viewport::Narrow);
    blog.load(&ApiSource::new(app.client.clone()), "#post-2").await;

    let Pane::Post(mobile) = &blog.screen().mobile else {
        panic!("expected post 2 in the mobile pane");
    };
    assert_eq!(mobile.title, "Post number 2");
    assert_eq!(blog.screen().active(), Some(2));

    let requests = app.requests_to("/content");
    assert_eq!(requests.len(), 1, "post 2 came with the list");
    assert_eq!(requests[0].query, "list=1&post=2");
    Ok(())
}

#[tokio::test]
async fn fetch_post_rejects_missing_post() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;
    let source = ApiSource::new(app.client.clone());

    assert_eq!(source.fetch_post(1).await?.post.title, "Post number 1");
    assert!(matches!(
        source.fetch_post(10).await,
        Err(blog::BlogError::EmptyResult)
    ));

    let listing = source.fetch_list(PostSelection::Index(1)).await?;
    assert_eq!(listing.post.unwrap().post.title, "Post number 1");
    Ok(())
}
