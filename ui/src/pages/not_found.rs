use crate::hooks::use_title;
use crate::{base_path, components::layout::nav};
use yew::prelude::*;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Page not found");

    html! {
        <div class="max-w-3xl mx-auto px-4 py-24 text-center space-y-4">
            <h1 class="text-4xl font-bold text-slate-900">{"404"}</h1>
            <p class="text-slate-600">{"We couldn't find that page."}</p>
            <a href={nav::href(&base_path(), "/")} class="text-brand-600 font-medium hover:text-brand-700">
                {"Back to the home page"}
            </a>
        </div>
    }
}
