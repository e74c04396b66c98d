//! Blog reader core: loading posts from the content API or an RSS feed,
//! cleaning their HTML, and deciding what the blog page shows as the URL
//! hash changes.
//!
//! Nothing here touches the DOM. The `ui` crate renders [`BlogScreen`] and
//! feeds hash changes back into the [`NavigationController`].

pub mod error;
pub mod feed;
pub mod navigation;
pub mod sanitize;
pub mod source;
pub mod store;
pub mod text;
pub mod time;
pub mod view;

pub use error::BlogError;
pub use navigation::{BlogScreen, NavState, NavigationController, Pane, Route, Viewport};
pub use sanitize::{Sanitizer, sanitize_html};
pub use source::{ApiSource, ContentSource, FeedSource, FetchStrategy, PostListing};
pub use store::PostStore;
pub use time::TimeSource;
pub use view::{
    DetailBody, ListVariant, PostDetailView, PostListItemView, PostListView, RenderContext,
};
