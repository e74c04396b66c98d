use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

/// Overlay closed by clicking the backdrop or pressing Escape.
///
/// # Example
///
/// ```rust,ignore
/// html! {
///     if *open {
///         <Modal on_close={close.clone()} label="Signup">
///             <p>{"Content"}</p>
///         </Modal>
///     }
/// }
/// ```
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub children: Html,
    /// Called on backdrop click or Escape
    pub on_close: Callback<()>,
    /// Accessible name of the dialog
    pub label: AttrValue,
    /// Classes of the panel (default: a white card "max-w-md")
    #[prop_or_else(|| AttrValue::from("bg-white rounded-2xl shadow-xl w-full max-w-md p-6"))]
    pub panel_class: AttrValue,
    #[prop_or(true)]
    pub close_on_backdrop: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    use_effect_with(props.on_close.clone(), |on_close| {
        let on_close = on_close.clone();
        let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let document = web_sys::window().and_then(|w| w.document());
        if let Some(document) = &document {
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }

        move || {
            if let Some(document) = document {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    closure.as_ref().unchecked_ref(),
                );
            }
            drop(closure);
        }
    });

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        let close_on_backdrop = props.close_on_backdrop;

        Callback::from(move |e: MouseEvent| {
            if !close_on_backdrop {
                return;
            }

            if let Some(backdrop_element) = backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>() == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            role="dialog"
            aria-modal="true"
            aria-label={props.label.clone()}
            class="fixed inset-0 bg-slate-900/60 backdrop-blur-sm z-50 flex
                   items-center justify-center p-4"
        >
            <div class={props.panel_class.clone()}>
                {props.children.clone()}
            </div>
        </div>
    }
}
