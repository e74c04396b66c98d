use payloads::ClientError;
use payloads::requests::WaitlistSignup;
use reqwest::StatusCode;
use test_helpers::{MockBehavior, spawn_app};

fn signup(email: &str) -> WaitlistSignup {
    WaitlistSignup {
        email: email.into(),
        name: Some("Sam".into()),
        role: Some("creator".into()),
        subscriber_range: Some("10k-100k".into()),
        ..WaitlistSignup::default()
    }
}

#[tokio::test]
async fn signup_is_recorded() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;

    app.client.join_waitlist(&signup("sam@example.com")).await?;

    let signups = app.signups();
    assert_eq!(signups.len(), 1);
    assert_eq!(signups[0], signup("sam@example.com"));
    Ok(())
}

#[tokio::test]
async fn server_message_is_surfaced() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;

    match app.client.join_waitlist(&signup("sam@taken.example")).await {
        Err(ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::CONFLICT);
            assert_eq!(text, "This email is already on the waitlist");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }
    assert!(app.signups().is_empty());
    Ok(())
}

#[tokio::test]
async fn unreadable_failure_gets_generic_message() -> anyhow::Result<()> {
    let app = spawn_app(MockBehavior::default()).await;

    let error = app
        .client
        .join_waitlist(&signup("sam@broken.example"))
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Failed to join waitlist");
    Ok(())
}
