//! View models for the blog page. Pure functions of a post and the clock, so
//! the markup layer only lays them out.

use crate::time::{TimeSource, elapsed, format_date};
use jiff::{Timestamp, tz::TimeZone};
use payloads::{FullPost, Post};

pub const READ_ORIGINAL_LABEL: &str = "Read on beehiiv";
pub const READ_MORE_LABEL: &str = "Read more";
pub const EMPTY_LIST_MESSAGE: &str = "No posts available.";
pub const LOADING_BADGE_LABEL: &str = "Loading...";

/// Everything besides the post that affects how it renders.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub now: Timestamp,
    pub time_zone: TimeZone,
}

impl RenderContext {
    pub fn new(now: Timestamp, time_zone: TimeZone) -> Self {
        Self { now, time_zone }
    }

    /// Current time from `clock` in the viewer's time zone.
    pub fn current(clock: &TimeSource) -> Self {
        Self::new(clock.now(), TimeZone::system())
    }
}

/// Date line shared by list entries and detail views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub date: String,
    pub elapsed: String,
    pub author: Option<String>,
}

impl PostMeta {
    pub fn new(post: &Post, ctx: &RenderContext) -> Self {
        Self {
            date: format_date(&post.date, &ctx.time_zone),
            elapsed: elapsed(&post.date, ctx.now),
            author: post.author.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailBody {
    /// Sanitized post HTML, safe to inject as is.
    Html(String),
    /// Excerpt shown when the source sent no body. Rendered as text.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetailView {
    pub index: usize,
    pub meta: PostMeta,
    pub title: String,
    pub body: DetailBody,
    pub link: String,
    pub link_label: &'static str,
}

/// Detail view of an already sanitized post.
pub fn render_detail(index: usize, post: &FullPost, ctx: &RenderContext) -> PostDetailView {
    let body = match post.full_content.as_deref() {
        Some(html) if !html.trim().is_empty() => DetailBody::Html(html.to_string()),
        _ => DetailBody::Text(post.post.excerpt.clone()),
    };
    PostDetailView {
        index,
        meta: PostMeta::new(&post.post, ctx),
        title: post.post.title.clone(),
        body,
        link: post.post.link.clone(),
        link_label: READ_ORIGINAL_LABEL,
    }
}

/// The two places the post list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVariant {
    Sidebar,
    Mobile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListItemView {
    pub index: usize,
    pub variant: ListVariant,
    pub meta: PostMeta,
    pub title: String,
    pub href: String,
    pub excerpt: String,
    pub read_more: &'static str,
    pub active: bool,
    pub loading: bool,
}

impl PostListItemView {
    /// Inline badge while this entry's post is being fetched.
    pub fn badge(&self) -> Option<&'static str> {
        self.loading.then_some(LOADING_BADGE_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListView {
    pub variant: ListVariant,
    pub items: Vec<PostListItemView>,
    pub empty_message: Option<&'static str>,
}

impl PostListView {
    pub fn set_active(&mut self, index: Option<usize>) {
        for item in &mut self.items {
            item.active = Some(item.index) == index;
        }
    }

    pub fn set_loading(&mut self, index: usize, loading: bool) {
        if let Some(item) = self.items.iter_mut().find(|item| item.index == index) {
            item.loading = loading;
        }
    }
}

/// Link target selecting the post at `index`.
pub fn post_href(index: usize) -> String {
    format!("#post-{index}")
}

pub fn render_list(posts: &[Post], variant: ListVariant, ctx: &RenderContext) -> PostListView {
    let items = posts
        .iter()
        .enumerate()
        .map(|(index, post)| PostListItemView {
            index,
            variant,
            meta: PostMeta::new(post, ctx),
            title: post.title.clone(),
            href: post_href(index),
            excerpt: post.excerpt.clone(),
            read_more: READ_MORE_LABEL,
            active: false,
            loading: false,
        })
        .collect::<Vec<_>>();
    PostListView {
        variant,
        empty_message: items.is_empty().then_some(EMPTY_LIST_MESSAGE),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new("2025-01-03T00:00:00Z".parse().unwrap(), TimeZone::UTC)
    }

    fn post(date: &str) -> Post {
        Post {
            title: "Hello".into(),
            link: "https://newsletter.example/p/hello".into(),
            date: date.into(),
            excerpt: "Short summary".into(),
            author: Some("Jane".into()),
        }
    }

    #[test]
    fn detail_view_carries_dates_and_link() {
        let full = FullPost::new(post("2025-01-01T00:00:00Z"), Some("<p>Body</p>".into()));
        let view = render_detail(4, &full, &ctx());
        assert_eq!(view.index, 4);
        assert_eq!(view.meta.date, "January 1, 2025");
        assert_eq!(view.meta.elapsed, "2 days ago");
        assert_eq!(view.meta.author.as_deref(), Some("Jane"));
        assert_eq!(view.body, DetailBody::Html("<p>Body</p>".into()));
        assert_eq!(view.link_label, "Read on beehiiv");
    }

    #[test]
    fn detail_without_body_shows_excerpt_as_text() {
        let full = FullPost::new(post("2025-01-01T00:00:00Z"), None);
        let view = render_detail(0, &full, &ctx());
        assert_eq!(view.body, DetailBody::Text("Short summary".into()));
    }

    #[test]
    fn unparseable_date_is_shown_raw_without_elapsed() {
        let view = render_detail(0, &FullPost::new(post("someday"), None), &ctx());
        assert_eq!(view.meta.date, "someday");
        assert_eq!(view.meta.elapsed, "");
    }

    #[test]
    fn list_items_link_to_their_index() {
        let posts = vec![post("2025-01-02T00:00:00Z"), post("2025-01-01T00:00:00Z")];
        let list = render_list(&posts, ListVariant::Mobile, &ctx());
        assert_eq!(list.empty_message, None);
        assert_eq!(list.items[1].href, "#post-1");
        assert_eq!(list.items[0].meta.elapsed, "1 day ago");
        assert_eq!(list.items[0].read_more, READ_MORE_LABEL);

        let sidebar = render_list(&posts, ListVariant::Sidebar, &ctx());
        assert_eq!(sidebar.items[0].read_more, READ_MORE_LABEL);
        assert_eq!(sidebar.items[0].excerpt, "Short summary");
    }

    #[test]
    fn loading_entry_carries_a_badge() {
        let posts = vec![post("a"), post("b")];
        let mut list = render_list(&posts, ListVariant::Sidebar, &ctx());
        list.set_loading(1, true);
        assert_eq!(list.items[0].badge(), None);
        assert_eq!(list.items[1].badge(), Some(LOADING_BADGE_LABEL));
        list.set_loading(1, false);
        assert_eq!(list.items[1].badge(), None);
    }

    #[test]
    fn empty_list_has_a_message() {
        let list = render_list(&[], ListVariant::Sidebar, &ctx());
        assert_eq!(list.empty_message, Some("No posts available."));
    }

    #[test]
    fn only_one_entry_is_active() {
        let posts = vec![post("a"), post("b"), post("c")];
        let mut list = render_list(&posts, ListVariant::Sidebar, &ctx());
        list.set_active(Some(1));
        list.set_active(Some(2));
        let active: Vec<_> = list.items.iter().filter(|i| i.active).map(|i| i.index).collect();
        assert_eq!(active, vec![2]);
        list.set_active(None);
        assert!(list.items.iter().all(|i| !i.active));
    }
}
