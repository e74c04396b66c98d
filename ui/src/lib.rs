use components::layout::{MainLayout, nav};
use config::SiteConfig;
use std::sync::OnceLock;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod hooks;
mod logs;
pub mod pages;
pub mod pricing;
pub mod state;
pub mod waitlist;

pub use state::State;

/// Configuration baked in at build time.
pub fn site_config() -> &'static SiteConfig {
    static CONFIG: OnceLock<SiteConfig> = OnceLock::new();
    CONFIG.get_or_init(SiteConfig::from_env)
}

/// Path of the current page, `/` outside a browser.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Prefix for site links: `BASE_PATH` if set at build time, otherwise
/// derived from the page location.
pub fn base_path() -> String {
    site_config()
        .base_path
        .clone()
        .unwrap_or_else(|| nav::base_path(&current_path()))
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    let base = base_path();
    let basename = (!base.is_empty()).then(|| AttrValue::from(base));

    html! {
        <BrowserRouter {basename}>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Index,
    #[at("/blog.html")]
    Blog,
    #[at("/blog")]
    BlogSection,
    #[at("/pricing.html")]
    Pricing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Index => html! { <pages::HomePage /> },
        Route::Blog | Route::BlogSection => html! { <pages::BlogPage /> },
        Route::Pricing => html! { <pages::PricingPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_is_reachable_with_and_without_extension() {
        assert_eq!(Route::recognize("/blog.html"), Some(Route::Blog));
        assert_eq!(Route::recognize("/blog"), Some(Route::BlogSection));
        assert_eq!(Route::recognize("/pricing.html"), Some(Route::Pricing));
    }
}
