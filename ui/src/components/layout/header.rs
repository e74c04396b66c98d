use super::nav::{self, NAV_LINKS, PRODUCT, PRODUCT_SUBPAGES};
use crate::{State, base_path, current_path};
use yew::prelude::*;
use yewdux::prelude::*;

fn link_class(active: bool) -> &'static str {
    if active {
        "text-brand-600"
    } else {
        "text-slate-600"
    }
}

#[function_component]
pub fn Header() -> Html {
    let (_, dispatch) = use_store::<State>();
    let menu_open = use_state(|| false);
    let current = current_path();
    let base = base_path();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let open_waitlist = {
        let dispatch = dispatch.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            dispatch.reduce_mut(|state| state.open_waitlist());
        })
    };

    let desktop_links = NAV_LINKS.iter().map(|link| {
        let target = nav::href(&base, link.path);
        let active = nav::is_active(&current, &target);
        if link.name == PRODUCT {
            let dropdown = PRODUCT_SUBPAGES.iter().map(|sub| {
                let sub_target = nav::href(&base, sub.path);
                let sub_class = if current == sub_target {
                    "text-brand-600 bg-slate-50"
                } else {
                    "text-slate-600 hover:text-brand-600 hover:bg-slate-50"
                };
                html! {
                    <a href={sub_target} class={classes!("block", "px-4", "py-2", "text-sm", sub_class)}>
                        {sub.name}
                    </a>
                }
            });
            html! {
                <div class="relative group">
                    <a
                        href={target}
                        class={classes!(
                            "inline-flex", "items-center", "gap-1", "text-sm", "font-medium",
                            "transition-colors", "hover:text-brand-600", link_class(active)
                        )}
                    >
                        <span>{link.name}</span>
                        <span class="material-symbols-rounded text-[16px] leading-none">{"expand_more"}</span>
                    </a>
                    <div class="invisible opacity-0 group-hover:visible group-hover:opacity-100
                                transition-opacity duration-150 absolute left-1/2 -translate-x-1/2
                                top-full w-56 rounded-xl bg-white shadow-lg border border-slate-100
                                py-2 z-50">
                        {for dropdown}
                    </div>
                </div>
            }
        } else {
            html! {
                <a
                    href={target}
                    class={classes!(
                        "text-sm", "font-medium", "transition-colors", "hover:text-brand-600",
                        link_class(active)
                    )}
                >
                    {link.name}
                </a>
            }
        }
    });

    let mobile_links = NAV_LINKS.iter().map(|link| {
        let target = nav::href(&base, link.path);
        let entry = html! {
            <a
                href={target}
                class="block px-3 py-2 rounded-md text-base font-medium text-slate-700
                       hover:text-brand-600 hover:bg-slate-50"
            >
                {link.name}
            </a>
        };
        if link.name != PRODUCT {
            return entry;
        }
        html! {
            <div class="mb-2">
                {entry}
                {for PRODUCT_SUBPAGES.iter().map(|sub| html! {
                    <a
                        href={nav::href(&base, sub.path)}
                        class="block pl-6 pr-3 py-1.5 rounded-md text-sm font-medium
                               text-slate-600 hover:text-brand-600 hover:bg-slate-50"
                    >
                        {format!("– {}", sub.name)}
                    </a>
                })}
            </div>
        }
    });

    html! {
        <header class="fixed top-0 left-0 w-full bg-white/95 backdrop-blur-md z-50 border-b border-slate-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0 flex items-center">
                        <a href={nav::href(&base, "/")} class="flex items-center gap-2">
                            <div class="w-8 h-8 bg-brand-600 rounded-lg flex items-center justify-center
                                        text-white font-bold text-lg">
                                {"S"}
                            </div>
                            <span class="font-bold text-xl tracking-tight text-slate-900">{"Spark"}</span>
                        </a>
                    </div>

                    <nav class="hidden md:flex space-x-8">
                        {for desktop_links}
                    </nav>

                    <div class="flex items-center space-x-4">
                        <a
                            href={nav::waitlist_href(&base)}
                            onclick={open_waitlist.clone()}
                            class="hidden md:inline-flex items-center justify-center px-4 py-2 border
                                   border-transparent rounded-lg shadow-sm text-sm font-medium text-white
                                   bg-brand-600 hover:bg-brand-700 focus:outline-none focus:ring-2
                                   focus:ring-offset-2 focus:ring-brand-500 transition-all"
                        >
                            {"Join Waitlist"}
                        </a>
                        <button
                            onclick={toggle_menu}
                            aria-expanded={menu_open.to_string()}
                            aria-controls="mobile-menu"
                            class="md:hidden p-2 rounded-md text-slate-400 hover:text-slate-500
                                   hover:bg-slate-100 focus:outline-none"
                        >
                            <svg class="h-6 w-6" stroke="currentColor" fill="none" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                    </div>
                </div>
            </div>
            if *menu_open {
                <div id="mobile-menu" class="md:hidden bg-white border-t border-slate-100">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                        {for mobile_links}
                        <a
                            href={nav::waitlist_href(&base)}
                            onclick={open_waitlist}
                            class="block w-full text-center px-4 py-2 mt-4 border border-transparent
                                   rounded-lg shadow-sm text-sm font-medium text-white bg-brand-600
                                   hover:bg-brand-700"
                        >
                            {"Join Waitlist"}
                        </a>
                    </div>
                </div>
            }
        </header>
    }
}
