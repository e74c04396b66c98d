use payloads::ClientError;
use payloads::requests::PostSelection;
use reqwest::StatusCode;
use test_helpers::{MockBehavior, spawn_app};

#[tokio::test]
async fn list_comes_with_the_latest_post() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;

    let list = app.client.get_post_list(PostSelection::Latest).await?;
    assert_eq!(list.posts.len(), 3);
    assert_eq!(list.posts[0].title, "Post number 0");
    let latest = list.post.unwrap();
    assert_eq!(latest.post.title, "Post number 0");
    assert!(!latest.sanitized);
    assert!(latest.full_content.is_some());

    assert_eq!(app.requests()[0].query, "list=1&latest=1");
    Ok(())
}

#[tokio::test]
async fn unsuccessful_list_is_an_error() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior {
        success: false,
        ..MockBehavior::default()
    })
    .await;

    let result = app.client.get_post_list(PostSelection::Latest).await;
    assert!(matches!(result, Err(ClientError::Unsuccessful)));
    Ok(())
}

#[tokio::test]
async fn empty_list_is_an_error() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::with_posts(Vec::new())).await;

    let result = app.client.get_post_list(PostSelection::Latest).await;
    assert!(matches!(result, Err(ClientError::EmptyResult)));
    Ok(())
}

#[tokio::test]
async fn server_error_carries_status() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior {
        list_status: 500,
        ..MockBehavior::default()
    })
    .await;

    match app.client.get_post_list(PostSelection::Index(1)).await {
        Err(ClientError::APIError(code, _)) => {
            assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("Expected APIError, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn single_post_by_index() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;

    let post = app.client.get_post(2).await?;
    assert_eq!(post.post.title, "Post number 2");
    assert_eq!(app.requests()[0].query, "post=2");

    let missing = app.client.get_post(3).await;
    assert!(matches!(missing, Err(ClientError::EmptyResult)));
    Ok(())
}
