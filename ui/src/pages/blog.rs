use crate::components::{PostList, PostPane};
use crate::config::SiteSource;
use crate::hooks::{use_title, use_window_listener};
use crate::site_config;
use blog::{BlogScreen, ContentSource, NavState, NavigationController, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Resolves once the browser has painted the next frame.
async fn next_animation_frame() {
    let (tx, rx) = futures::channel::oneshot::channel();
    let _frame = gloo_render::request_animation_frame(move |_| {
        let _ = tx.send(());
    });
    let _ = rx.await;
}

fn current_viewport() -> Viewport {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(blog::navigation::WIDE_VIEWPORT_MIN_PX);
    Viewport::from_width(width)
}

/// Connects a [`NavigationController`] to the page: fetches run on the
/// event loop and every step publishes a fresh [`BlogScreen`].
#[derive(Clone)]
struct BlogSession {
    controller: Rc<RefCell<NavigationController>>,
    source: Rc<SiteSource>,
    screen: UseStateHandle<BlogScreen>,
    mobile_pane: NodeRef,
}

impl BlogSession {
    fn publish(&self) {
        self.screen.set(self.controller.borrow().screen().clone());
    }

    async fn load(self) {
        let hash = current_hash();
        let selection = self.controller.borrow_mut().begin_load(&hash);
        self.publish();

        let result = self.source.fetch_list(selection).await;
        self.controller.borrow_mut().finish_load(&hash, result);
        self.publish();

        // Let the first post paint before building the lists.
        next_animation_frame().await;
        self.controller.borrow_mut().render_deferred_list();
        self.publish();

        if !hash.is_empty() {
            self.navigate(hash).await;
        }
    }

    async fn navigate(self, hash: String) {
        let pending = self.controller.borrow_mut().begin_navigation(&hash);
        self.publish();

        if let Some(index) = pending {
            let result = self.source.fetch_post(index).await;
            self.controller.borrow_mut().finish_fetch(index, result);
            self.publish();
        }
        self.reveal_mobile_post();
    }

    fn reveal_mobile_post(&self) {
        let controller = self.controller.borrow();
        if controller.viewport() != Viewport::Narrow
            || !matches!(controller.state(), NavState::PostSelected(_))
        {
            return;
        }
        if let Some(pane) = self.mobile_pane.cast::<web_sys::Element>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            pane.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component]
pub fn BlogPage() -> Html {
    use_title("Blog");

    let controller = use_mut_ref(|| NavigationController::new(current_viewport()));
    let source = use_memo((), |_| site_config().content_source());
    let screen = use_state(BlogScreen::default);
    let mobile_pane = use_node_ref();

    let session = BlogSession {
        controller: controller.clone(),
        source: source.clone(),
        screen: screen.clone(),
        mobile_pane: mobile_pane.clone(),
    };

    let hash_session = session.clone();
    use_effect_with((), move |_| {
        tracing::info!(source = %site_config().content_source, "Initializing blog");
        yew::platform::spawn_local(session.load());
    });

    let on_hash_change = use_callback((), move |_: web_sys::Event, _| {
        yew::platform::spawn_local(hash_session.clone().navigate(current_hash()));
    });
    use_window_listener("hashchange", on_hash_change);

    let on_resize = use_callback((), move |_: web_sys::Event, _| {
        controller.borrow_mut().set_viewport(current_viewport());
    });
    use_window_listener("resize", on_resize);

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="mb-10">
                <h1 class="text-4xl font-bold tracking-tight text-slate-900">{"Blog"}</h1>
                <p class="mt-2 text-lg text-slate-600">
                    {"Notes on teaching, learning and building Spark."}
                </p>
            </div>

            if screen.loading_visible {
                <div class="flex items-center gap-3 py-12 text-slate-500" role="status">
                    <span class="w-5 h-5 border-2 border-slate-300 border-t-brand-600 rounded-full animate-spin" />
                    <span>{"Loading posts..."}</span>
                </div>
            }

            if screen.error_visible {
                <div class="p-4 rounded-md bg-red-50 border border-red-200 mb-8" role="alert">
                    <p class="text-sm text-red-700">
                        {"We couldn't load the blog right now. Please try again later."}
                    </p>
                </div>
            }

            if screen.content_visible {
                <div class="hidden lg:grid lg:grid-cols-3 lg:gap-12">
                    <div class="lg:col-span-2">
                        <PostPane pane={screen.main.clone()} />
                    </div>
                    <aside>
                        <h2 class="text-sm font-semibold text-slate-900 uppercase tracking-wider mb-4">
                            {"All posts"}
                        </h2>
                        if let Some(list) = &screen.sidebar {
                            <PostList view={list.clone()} />
                        }
                    </aside>
                </div>

                <div class="lg:hidden space-y-10">
                    if let Some(list) = &screen.mobile_list {
                        <PostList view={list.clone()} />
                    }
                    <div ref={mobile_pane}>
                        <PostPane pane={screen.mobile.clone()} />
                    </div>
                </div>
            }
        </div>
    }
}
