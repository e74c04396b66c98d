use blog::{ApiSource, NavState, Pane, Viewport};
use test_helpers::{MockBehavior, mock, spawn_app};

use crate::controller;

#[tokio::test]
async fn selecting_a_post_fetches_and_renders_it() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::with_posts(mock::sample_posts(5))).await;
    let source = ApiSource::new(app.client.clone());
    let mut blog = controller(Viewport::Wide);
    blog.load(&source, "").await;

    for index in 1..5 {
        let hash = format!("#post-{index}");
        blog.navigate(&source, &hash).await;

        assert_eq!(blog.state(), NavState::PostSelected(index));
        let Pane::Post(view) = &blog.screen().main else {
            panic!("expected post {index}");
        };
        let expected = &mock::sample_posts(5)[index].post;
        assert_eq!(view.title, expected.title);
        assert_eq!(view.meta.date, blog::time::format_date(&expected.date, &jiff::tz::TimeZone::UTC));
        assert_eq!(blog.screen().mobile, blog.screen().main);
    }

    // one list request plus one per selected post
    assert_eq!(app.requests_to("/content").len(), 5);
    Ok(())
}

#[tokio::test]
async fn revisiting_a_post_uses_the_cache() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;
    let source = ApiSource::new(app.client.clone());
    let mut blog = controller(Viewport::Wide);
    blog.load(&source, "").await;

    blog.navigate(&source, "#post-1").await;
    blog.navigate(&source, "#post-0").await;
    blog.navigate(&source, "#post-1").await;

    assert_eq!(app.requests_to("/content").len(), 2);
    assert_eq!(blog.screen().active(), Some(1));
    Ok(())
}

#[tokio::test]
async fn out_of_range_hash_is_a_no_op() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;
    let source = ApiSource::new(app.client.clone());
    let mut blog = controller(Viewport::Wide);
    blog.load(&source, "").await;
    let before = blog.screen().clone();

    for hash in ["#post-3", "#post-99", "#post-18446744073709551616"] {
        blog.navigate(&source, hash).await;
        assert_eq!(blog.screen(), &before, "{hash}");
    }
    assert_eq!(app.requests_to("/content").len(), 1);
    Ok(())
}

#[tokio::test]
async fn failed_post_fetch_keeps_the_page() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;
    let source = ApiSource::new(app.client.clone());
    let mut blog = controller(Viewport::Wide);
    blog.load(&source, "").await;

    app.update_behavior(|b| b.post_status = 500);
    blog.navigate(&source, "#post-1").await;

    let screen = blog.screen();
    assert!(screen.error_visible);
    assert!(screen.content_visible);
    assert!(!screen.sidebar.as_ref().unwrap().items[1].loading);

    // the post can still be opened once the source recovers
    app.update_behavior(|b| b.post_status = 200);
    blog.navigate(&source, "#post-1").await;
    assert!(!blog.screen().error_visible);
    assert!(matches!(blog.screen().main, Pane::Post(_)));
    Ok(())
}
