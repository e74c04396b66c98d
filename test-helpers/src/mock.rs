//! Mock blog data shared by the integration tests and the dev-server.
//!
//! Bodies imitate what the newsletter CMS emits: inline styles, a title
//! heading, a short subtitle, an author photo, share links and pull quotes
//! laid out as plain divs. That gives the sanitizer realistic input.

use jiff::{Span, Timestamp, tz::TimeZone};
use payloads::{FullPost, Post};

/// Fixed reference time so generated dates are deterministic in tests.
pub const REFERENCE_TIME: &str = "2025-01-01T00:00:00Z";

pub fn reference_time() -> Timestamp {
    REFERENCE_TIME.parse().unwrap()
}

/// `count` posts, newest first, one day apart starting at the reference
/// time.
pub fn sample_posts(count: usize) -> Vec<FullPost> {
    sample_posts_at(reference_time(), count)
}

pub fn sample_posts_at(newest: Timestamp, count: usize) -> Vec<FullPost> {
    (0..count)
        .map(|i| {
            let date = newest - Span::new().hours(24 * i as i64);
            let title = format!("Post number {i}");
            let first = format!("First paragraph of post {i}.");
            FullPost::new(
                Post {
                    title: title.clone(),
                    link: format!("https://newsletter.example/p/post-{i}"),
                    date: date.to_string(),
                    excerpt: format!("Summary of post {i}."),
                    author: (i % 2 == 0).then(|| "Jane Doe".to_string()),
                },
                Some(newsletter_html(
                    &title,
                    "A short subtitle",
                    &[
                        first.as_str(),
                        "Second paragraph with <strong>emphasis</strong>.",
                    ],
                )),
            )
        })
        .collect()
}

/// A post body shaped like the CMS output.
pub fn newsletter_html(title: &str, subtitle: &str, paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<p style=\"color:#222\">{p}</p>\n"))
        .collect();
    format!(
        r#"<style>.post {{ color: red; }}</style>
<h1>{title}</h1>
<h2>{subtitle}</h2>
<div><div><img src="https://cdn.example/profile_picture/jane.png" alt="Author"></div></div>
{body}<div class="quote"><p>"Great tool"</p><small>— Jane Doe</small></div>
<div class="share"><a href="https://www.facebook.com/sharer/sharer.php?u=x">Share</a></div>
<!-- tracking pixel -->
<script>track()</script>"#
    )
}

/// RSS 2.0 document for `posts`, bodies in `content:encoded` CDATA.
pub fn feed_xml(posts: &[FullPost]) -> String {
    let items: String = posts.iter().map(feed_item).collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:dc="http://purl.org/dc/elements/1.1/">
<channel>
<title>Spark Notes</title>
<link>https://newsletter.example</link>
<description>Mock feed</description>
{items}</channel>
</rss>"#
    )
}

fn feed_item(post: &FullPost) -> String {
    let pub_date = post
        .post
        .date
        .parse::<Timestamp>()
        .ok()
        .and_then(|ts| {
            jiff::fmt::rfc2822::to_string(&ts.to_zoned(TimeZone::UTC)).ok()
        })
        .unwrap_or_else(|| post.post.date.clone());
    let creator = post
        .post
        .author
        .as_deref()
        .map(|a| format!("<dc:creator>{a}</dc:creator>\n"))
        .unwrap_or_default();
    let content = post
        .full_content
        .as_deref()
        .map(|c| format!("<content:encoded><![CDATA[{c}]]></content:encoded>\n"))
        .unwrap_or_default();
    format!(
        "<item>\n<title>{}</title>\n<link>{}</link>\n<pubDate>{pub_date}</pubDate>\n\
         {creator}<description><![CDATA[<p>{}</p>]]></description>\n{content}</item>\n",
        escape(&post.post.title),
        escape(&post.post.link),
        post.post.excerpt,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Dataset served by the dev-server: a dozen posts dated back from now.
pub fn demo_posts() -> Vec<FullPost> {
    let mut posts = sample_posts_at(Timestamp::now(), 12);
    for (i, post) in posts.iter_mut().enumerate() {
        post.post.title = DEMO_TITLES[i % DEMO_TITLES.len()].to_string();
    }
    posts
}

const DEMO_TITLES: &[&str] = &[
    "Turning a video library into a course",
    "What retention data taught us this month",
    "Why we paused the mobile app",
    "Office hours recap: pricing for cohorts",
    "How teachers are using chapter quizzes",
    "The case for fewer, longer lessons",
];
