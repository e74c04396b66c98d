use crate::components::WaitlistModal;
use crate::{State, components::layout::{Footer, Header}};
use yew::prelude::*;
use yewdux::prelude::*;

const WAITLIST_HASH: &str = "#waitlist";

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

/// Header and footer around a page, plus the waitlist form when open.
#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    let (state, dispatch) = use_store::<State>();

    // Links to `/#waitlist` from other pages land here with the form open.
    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            let hash = web_sys::window().and_then(|w| w.location().hash().ok());
            if hash.as_deref() == Some(WAITLIST_HASH) {
                dispatch.reduce_mut(|state| state.open_waitlist());
            }
        }
    });

    let on_close = dispatch.reduce_mut_callback(|state| state.close_waitlist());

    html! {
        <div class="min-h-screen flex flex-col bg-white text-slate-900">
            <Header />
            <main class="flex-1 pt-16">
                {for props.children.iter()}
            </main>
            <Footer />
            if state.waitlist_open {
                <WaitlistModal {on_close} />
            }
        </div>
    }
}
