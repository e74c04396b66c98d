use blog::view::PostMeta;
use blog::{DetailBody, ListVariant, Pane, PostDetailView, PostListView};
use yew::prelude::*;

fn meta_line(meta: &PostMeta) -> Html {
    html! {
        <div class="flex flex-wrap items-center gap-x-2 text-sm text-slate-500">
            <time>{meta.date.clone()}</time>
            if !meta.elapsed.is_empty() {
                <span aria-hidden="true">{"·"}</span>
                <span>{meta.elapsed.clone()}</span>
            }
            if let Some(author) = &meta.author {
                <span aria-hidden="true">{"·"}</span>
                <span>{author.clone()}</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PostDetailProps {
    pub view: PostDetailView,
}

#[function_component]
pub fn PostDetail(props: &PostDetailProps) -> Html {
    let view = &props.view;
    let body = match &view.body {
        // Sanitized by the blog core before it reaches a view.
        DetailBody::Html(html) => Html::from_html_unchecked(AttrValue::from(html.clone())),
        DetailBody::Text(text) => html! { <p>{text.clone()}</p> },
    };

    html! {
        <article class="space-y-6" data-post-index={view.index.to_string()}>
            <header class="space-y-2">
                <h2 class="text-3xl font-bold tracking-tight text-slate-900">{view.title.clone()}</h2>
                {meta_line(&view.meta)}
            </header>
            <div class="prose prose-slate max-w-none">
                {body}
            </div>
            <a
                href={view.link.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-1 text-sm font-medium text-brand-600
                       hover:text-brand-700"
            >
                {view.link_label}
                <span class="material-symbols-rounded text-[16px]">{"open_in_new"}</span>
            </a>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct PostPaneProps {
    pub pane: Pane,
}

#[function_component]
pub fn PostPane(props: &PostPaneProps) -> Html {
    match &props.pane {
        Pane::Empty => html! {},
        Pane::Loading => html! {
            <div class="flex items-center gap-3 py-12 text-slate-500" role="status">
                <span class="w-5 h-5 border-2 border-slate-300 border-t-brand-600 rounded-full animate-spin" />
                <span>{"Loading post..."}</span>
            </div>
        },
        Pane::Post(view) => html! { <PostDetail view={view.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct PostListProps {
    pub view: PostListView,
}

#[function_component]
pub fn PostList(props: &PostListProps) -> Html {
    let view = &props.view;
    if let Some(message) = view.empty_message {
        return html! { <p class="text-sm text-slate-500">{message}</p> };
    }

    let items = view.items.iter().map(|item| {
        let state_class = match (item.active, item.loading) {
            (_, true) => "opacity-60 animate-pulse",
            (true, false) => "bg-brand-50 border-brand-200",
            (false, false) => "border-transparent hover:bg-slate-50",
        };
        html! {
            <li key={item.index}>
                <a
                    href={item.href.clone()}
                    aria-current={item.active.then_some("true")}
                    aria-busy={item.loading.then_some("true")}
                    class={classes!("block", "rounded-xl", "border", "p-4", "transition-colors", state_class)}
                >
                    <div class="flex items-start justify-between gap-2">
                        <h3 class={classes!(
                            "font-semibold", "text-slate-900",
                            if item.variant == ListVariant::Sidebar { "text-sm" } else { "text-lg" }
                        )}>
                            {item.title.clone()}
                        </h3>
                        if let Some(badge) = item.badge() {
                            <span class="shrink-0 text-xs font-medium text-brand-600" role="status">{badge}</span>
                        }
                    </div>
                    <div class="mt-1">{meta_line(&item.meta)}</div>
                    <p class={classes!(
                        "mt-2", "text-sm", "text-slate-600",
                        if item.variant == ListVariant::Sidebar { "line-clamp-2" } else { "line-clamp-3" }
                    )}>
                        {item.excerpt.clone()}
                    </p>
                    <span class="mt-2 inline-block text-sm font-medium text-brand-600">{item.read_more}</span>
                </a>
            </li>
        }
    });

    html! {
        <ul class="space-y-2">
            {for items}
        </ul>
    }
}
