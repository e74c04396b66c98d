use crate::State;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yewdux::prelude::*;

/// Viewports at most this wide toggle tooltips on click instead of hover.
pub const NARROW_VIEWPORT_MAX_PX: f64 = 640.0;

pub fn click_toggles(viewport_width: f64) -> bool {
    viewport_width <= NARROW_VIEWPORT_MAX_PX
}

pub fn tooltip_id(id: &str) -> String {
    format!("tooltip-{id}")
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::MAX)
}

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub id: AttrValue,
    pub text: AttrValue,
    pub children: Html,
}

/// Hint shown next to its trigger. Opening one closes any other.
#[function_component]
pub fn Tooltip(props: &TooltipProps) -> Html {
    let (state, dispatch) = use_store::<State>();
    let open = state.is_tooltip_open(&props.id);

    use_effect_with((open, props.id.clone()), {
        let dispatch = dispatch.clone();
        move |(open, id)| {
            let mut listener = None;
            if *open && let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let id = id.clone();
                let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        dispatch.reduce_mut(|state| state.hide_tooltip(&id));
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                let _ = document
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                listener = Some((document, closure));
            }

            move || {
                if let Some((document, closure)) = listener {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    });

    let on_enter = {
        let dispatch = dispatch.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            let id = id.clone();
            dispatch.reduce_mut(move |state| state.show_tooltip(id));
        })
    };
    let on_leave = {
        let dispatch = dispatch.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            if !click_toggles(viewport_width()) {
                dispatch.reduce_mut(|state| state.hide_tooltip(&id));
            }
        })
    };
    let on_click = {
        let id = props.id.clone();
        Callback::from(move |e: MouseEvent| {
            if click_toggles(viewport_width()) {
                e.stop_propagation();
                let id = id.clone();
                dispatch.reduce_mut(move |state| state.toggle_tooltip(id));
            }
        })
    };

    let describe = tooltip_id(&props.id);

    html! {
        <span class="relative inline-flex items-center">
            <span
                tabindex="0"
                aria-describedby={open.then(|| AttrValue::from(describe.clone()))}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
                onclick={on_click}
                class="cursor-help"
            >
                {props.children.clone()}
            </span>
            if open {
                <span
                    id={describe}
                    role="tooltip"
                    class="absolute bottom-full left-1/2 -translate-x-1/2 mb-2 w-64 rounded-lg
                           bg-slate-900 px-3 py-2 text-xs text-white shadow-lg z-40"
                >
                    {props.text.clone()}
                </span>
            }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_use_clicks() {
        assert!(click_toggles(375.0));
        assert!(click_toggles(640.0));
        assert!(!click_toggles(641.0));
    }

    #[test]
    fn ids_are_namespaced() {
        assert_eq!(tooltip_id("students"), "tooltip-students");
    }
}
