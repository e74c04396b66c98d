//! Hash-driven selection of the post on display.
//!
//! The controller owns the session's posts and a [`BlogScreen`] describing
//! what the page should show. Work is split into synchronous `begin_*` and
//! `finish_*` steps around each fetch, so a UI can run the request on its
//! event loop without holding the controller across the await. `load` and
//! `navigate` compose those steps for callers that can.

use crate::error::BlogError;
use crate::source::{ContentSource, PostListing};
use crate::store::PostStore;
use crate::time::TimeSource;
use crate::view::{
    ListVariant, PostDetailView, PostListView, RenderContext, render_detail, render_list,
};
use jiff::tz::TimeZone;
use payloads::FullPost;
use payloads::requests::PostSelection;
use std::collections::BTreeSet;

/// Viewports at least this wide show the latest post by default.
pub const WIDE_VIEWPORT_MIN_PX: f64 = 1024.0;

const HASH_PREFIX: &str = "#post-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// No explicit selection.
    Latest,
    Post(usize),
}

impl Route {
    /// `#post-N` selects post N. Anything else, including a malformed
    /// number, is no selection.
    pub fn from_hash(hash: &str) -> Self {
        hash.strip_prefix(HASH_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map_or(Route::Latest, Route::Post)
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Route::Latest => None,
            Route::Post(index) => Some(*index),
        }
    }

    pub fn selection(&self) -> PostSelection {
        PostSelection::from_index(self.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Wide,
    Narrow,
}

impl Viewport {
    pub fn from_width(px: f64) -> Self {
        if px >= WIDE_VIEWPORT_MIN_PX {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    NoSelection,
    PostSelected(usize),
}

/// Contents of one of the two detail panes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Empty,
    Loading,
    Post(PostDetailView),
}

/// What the blog page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogScreen {
    pub loading_visible: bool,
    pub error_visible: bool,
    pub content_visible: bool,
    /// Main pane; on wide viewports it doubles as the "latest post" slot.
    pub main: Pane,
    /// Detail pane of the narrow layout.
    pub mobile: Pane,
    pub sidebar: Option<PostListView>,
    pub mobile_list: Option<PostListView>,
    active: Option<usize>,
}

impl Default for BlogScreen {
    fn default() -> Self {
        Self {
            loading_visible: true,
            error_visible: false,
            content_visible: false,
            main: Pane::Empty,
            mobile: Pane::Empty,
            sidebar: None,
            mobile_list: None,
            active: None,
        }
    }
}

impl BlogScreen {
    /// The highlighted list entry, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    fn lists_mut(&mut self) -> impl Iterator<Item = &mut PostListView> {
        self.sidebar.iter_mut().chain(self.mobile_list.iter_mut())
    }

    fn set_active(&mut self, index: Option<usize>) {
        self.active = index;
        for list in self.lists_mut() {
            list.set_active(index);
        }
    }

    fn set_loading(&mut self, index: usize, loading: bool) {
        for list in self.lists_mut() {
            list.set_loading(index, loading);
        }
    }

    fn show_error(&mut self) {
        self.loading_visible = false;
        self.error_visible = true;
    }
}

pub struct NavigationController {
    store: PostStore,
    screen: BlogScreen,
    state: NavState,
    viewport: Viewport,
    /// Indices with a fetch in flight.
    pending: BTreeSet<usize>,
    /// Set between the first paint and the list render that follows it.
    deferred_list: bool,
    clock: TimeSource,
    time_zone: TimeZone,
}

impl NavigationController {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_clock(viewport, TimeSource::new(), TimeZone::system())
    }

    pub fn with_clock(viewport: Viewport, clock: TimeSource, time_zone: TimeZone) -> Self {
        Self {
            store: PostStore::default(),
            screen: BlogScreen::default(),
            state: NavState::NoSelection,
            viewport,
            pending: BTreeSet::new(),
            deferred_list: false,
            clock,
            time_zone,
        }
    }

    pub fn screen(&self) -> &BlogScreen {
        &self.screen
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    fn context(&self) -> RenderContext {
        RenderContext::new(self.clock.now(), self.time_zone.clone())
    }

    /// Start the initial load. Returns what to request from the source.
    pub fn begin_load(&mut self, hash: &str) -> PostSelection {
        self.screen = BlogScreen::default();
        let selection = Route::from_hash(hash).selection();
        tracing::info!(?selection, "Loading posts");
        selection
    }

    /// Apply the initial list response: paint the post that came with it
    /// and leave the list for [`Self::render_deferred_list`].
    pub fn finish_load(&mut self, hash: &str, result: Result<PostListing, BlogError>) {
        let listing = match result {
            Ok(listing) => listing,
            Err(error) => {
                tracing::error!(%error, "Failed to load posts");
                self.screen.show_error();
                return;
            }
        };

        tracing::info!(posts = listing.posts.len(), "Loaded posts");
        self.store.set_list(listing.posts);
        self.screen.loading_visible = false;
        self.screen.error_visible = false;
        self.screen.content_visible = true;

        let index = Route::from_hash(hash).selection().index();
        if let Some(post) = listing.post.filter(|_| self.store.contains(index)) {
            self.store.insert(index, post);
            if let Some(view) = self.detail(index) {
                self.screen.main = Pane::Post(view);
            }
        }
        self.deferred_list = true;
    }

    /// Render both post lists, one frame after the first paint.
    pub fn render_deferred_list(&mut self) {
        if !std::mem::take(&mut self.deferred_list) {
            return;
        }
        let ctx = self.context();
        let active = self.screen.active;
        for variant in [ListVariant::Sidebar, ListVariant::Mobile] {
            let mut list = render_list(self.store.posts(), variant, &ctx);
            list.set_active(active);
            for index in &self.pending {
                list.set_loading(*index, true);
            }
            match variant {
                ListVariant::Sidebar => self.screen.sidebar = Some(list),
                ListVariant::Mobile => self.screen.mobile_list = Some(list),
            }
        }
    }

    /// React to a hash change. Returns the index to fetch, if the selected
    /// post is neither cached nor already being fetched.
    pub fn begin_navigation(&mut self, hash: &str) -> Option<usize> {
        if self.store.is_empty() {
            return None;
        }
        self.screen.error_visible = false;

        match Route::from_hash(hash) {
            Route::Post(index) if self.store.contains(index) => self.select(index),
            Route::Post(index) => {
                tracing::debug!(index, len = self.store.len(), "Ignoring out of range post");
                self.state = NavState::NoSelection;
                self.screen.set_active(None);
                None
            }
            Route::Latest => {
                self.show_default();
                None
            }
        }
    }

    fn select(&mut self, index: usize) -> Option<usize> {
        self.state = NavState::PostSelected(index);

        if self.store.is_cached(index) {
            tracing::debug!(index, "Showing cached post");
            self.show_post(index);
            return None;
        }

        self.screen.main = Pane::Loading;
        self.screen.mobile = Pane::Loading;
        self.screen.set_loading(index, true);
        if !self.pending.insert(index) {
            tracing::debug!(index, "Fetch already in flight");
            return None;
        }
        Some(index)
    }

    /// Apply the result of fetching post `index`. The post is cached either
    /// way, but only shown if it is still the one selected.
    pub fn finish_fetch(&mut self, index: usize, result: Result<FullPost, BlogError>) {
        self.pending.remove(&index);
        self.screen.set_loading(index, false);
        let selected = self.state == NavState::PostSelected(index);

        match result {
            Ok(post) => {
                self.store.insert(index, post);
                if selected {
                    self.show_post(index);
                } else {
                    tracing::debug!(index, "Cached post that is no longer selected");
                }
            }
            Err(error) if selected => {
                tracing::error!(index, %error, "Failed to load post");
                self.screen.show_error();
            }
            Err(error) => {
                tracing::warn!(index, %error, "Failed to load post that is no longer selected");
            }
        }
    }

    fn detail(&mut self, index: usize) -> Option<PostDetailView> {
        let ctx = self.context();
        self.store
            .prepared(index)
            .map(|post| render_detail(index, post, &ctx))
    }

    fn show_post(&mut self, index: usize) {
        if let Some(view) = self.detail(index) {
            self.screen.main = Pane::Post(view.clone());
            self.screen.mobile = Pane::Post(view);
        }
        self.screen.set_active(Some(index));
    }

    fn show_default(&mut self) {
        self.state = NavState::NoSelection;
        self.screen.set_active(None);
        match self.viewport {
            Viewport::Wide => {
                if let Some(view) = self.detail(0) {
                    self.screen.main = Pane::Post(view);
                }
            }
            Viewport::Narrow => {
                self.screen.main = Pane::Empty;
                self.screen.mobile = Pane::Empty;
            }
        }
    }

    /// Initial load end to end: list, first paint, list render, then the
    /// post named in `hash`.
    pub async fn load<S: ContentSource>(&mut self, source: &S, hash: &str) {
        let selection = self.begin_load(hash);
        let result = source.fetch_list(selection).await;
        self.finish_load(hash, result);
        self.render_deferred_list();
        if !hash.is_empty() {
            self.navigate(source, hash).await;
        }
    }

    pub async fn navigate<S: ContentSource>(&mut self, source: &S, hash: &str) {
        if let Some(index) = self.begin_navigation(hash) {
            let result = source.fetch_post(index).await;
            self.finish_fetch(index, result);
        }
    }
}
