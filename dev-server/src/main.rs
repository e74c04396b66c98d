//! Development server for work on the site UI
//!
//! Serves the mock content function, RSS feed, CORS relay and waitlist
//! function with a demo set of posts, so the blog and waitlist form can be
//! exercised without the production endpoints.
//!
//! Usage: cargo run -p dev-server

use anyhow::{Context, Result};
use test_helpers::{MockBehavior, mock};
use tracing::info;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    test_helpers::init_logging("info,test_helpers=debug");

    let port = match std::env::var("DEV_SERVER_PORT") {
        Ok(port) => port.parse().context("DEV_SERVER_PORT must be a port number")?,
        Err(_) => DEFAULT_PORT,
    };

    info!("🚀 Starting Spark development server");

    let posts = mock::demo_posts();
    let post_count = posts.len();
    let app = test_helpers::spawn_app_on_port(port, MockBehavior::with_posts(posts)).await;
    let address = &app.address;

    info!("✅ Mock endpoints running on {address}");
    info!("📰 Serving {post_count} demo posts");
    info!("   Content API: {address}/content");
    info!("   RSS feed:    {}", app.feed_url());
    info!("   Feed relay:  {}", app.proxy_url());
    info!("   Waitlist:    {address}/waitlist");
    info!("");
    info!(
        "   UI:  cd ui && CONTENT_API_URL={address}/content WAITLIST_URL={address}/waitlist trunk serve"
    );
    info!(
        "   RSS: cd ui && CONTENT_SOURCE=rss FEED_URL={} FEED_PROXY_URL={} trunk serve",
        app.feed_url(),
        app.proxy_url()
    );
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    info!("📝 {} waitlist signups received", app.signups().len());
    Ok(())
}
