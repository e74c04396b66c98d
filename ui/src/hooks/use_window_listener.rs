use wasm_bindgen::prelude::*;
use yew::prelude::*;

/// Calls `callback` for every `event` fired on the window while mounted.
///
/// The listener is re-attached whenever `callback` changes, so pass a
/// memoized callback (`use_callback`) to keep a single subscription.
#[hook]
pub fn use_window_listener(event: &'static str, callback: Callback<web_sys::Event>) {
    use_effect_with(callback, move |callback| {
        let callback = callback.clone();
        let window = web_sys::window();
        let closure = Closure::wrap(
            Box::new(move |e: web_sys::Event| callback.emit(e)) as Box<dyn FnMut(web_sys::Event)>
        );

        if let Some(window) = &window {
            let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }

        move || {
            if let Some(window) = window {
                let _ = window
                    .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
            drop(closure);
        }
    });
}
