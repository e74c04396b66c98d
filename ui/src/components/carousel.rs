use crate::components::Modal;
use std::rc::Rc;
use yew::prelude::*;

/// Pointer travel, in pixels, under which a press counts as a tap.
pub const TAP_SLOP_PX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    active: usize,
    viewer_open: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            viewer_open: false,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_viewer_open(&self) -> bool {
        self.viewer_open
    }

    pub fn go_to(&mut self, index: usize) {
        self.active = index.min(self.len.saturating_sub(1));
    }

    pub fn can_prev(&self) -> bool {
        self.active > 0
    }

    pub fn can_next(&self) -> bool {
        self.active + 1 < self.len
    }

    pub fn prev(&mut self) {
        self.go_to(self.active.saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.go_to(self.active + 1);
    }

    pub fn open_viewer(&mut self) {
        if self.len > 0 {
            self.viewer_open = true;
        }
    }

    pub fn close_viewer(&mut self) {
        self.viewer_open = false;
    }
}

pub fn is_tap(start: (f64, f64), end: (f64, f64)) -> bool {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    dx.hypot(dy) <= TAP_SLOP_PX
}

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub caption: Option<AttrValue>,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
    #[prop_or_else(|| AttrValue::from("Gallery"))]
    pub label: AttrValue,
}

#[function_component]
pub fn Carousel(props: &CarouselProps) -> Html {
    let state = use_state(|| CarouselState::new(props.slides.len()));
    let press_start = use_mut_ref(|| None::<(f64, f64)>);

    let update = {
        let state = state.clone();
        Rc::new(move |f: &dyn Fn(&mut CarouselState)| {
            let mut next = *state;
            f(&mut next);
            state.set(next);
        })
    };

    let on_prev = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| update(&|s| s.prev()))
    };
    let on_next = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| update(&|s| s.next()))
    };
    let on_close = {
        let update = update.clone();
        Callback::from(move |_: ()| update(&|s| s.close_viewer()))
    };

    let on_pointer_down = {
        let press_start = press_start.clone();
        Callback::from(move |e: PointerEvent| {
            *press_start.borrow_mut() = Some((e.client_x() as f64, e.client_y() as f64));
        })
    };
    let on_pointer_up = {
        let update = update.clone();
        Callback::from(move |e: PointerEvent| {
            let end = (e.client_x() as f64, e.client_y() as f64);
            if let Some(start) = press_start.borrow_mut().take()
                && is_tap(start, end)
            {
                update(&|s| s.open_viewer());
            }
        })
    };

    let Some(current) = props.slides.get(state.active()) else {
        return html! {};
    };

    let dots = (0..props.slides.len()).map(|index| {
        let update = update.clone();
        let active = index == state.active();
        html! {
            <button
                type="button"
                onclick={Callback::from(move |_: MouseEvent| update(&|s| s.go_to(index)))}
                aria-label={format!("Show slide {}", index + 1)}
                aria-current={active.then_some("true")}
                class={classes!(
                    "w-2.5", "h-2.5", "rounded-full", "transition-colors",
                    if active { "bg-brand-600" } else { "bg-slate-300 hover:bg-slate-400" }
                )}
            />
        }
    });

    html! {
        <div class="relative" aria-roledescription="carousel" aria-label={props.label.clone()}>
            <div
                class="overflow-hidden rounded-2xl cursor-zoom-in touch-pan-y"
                onpointerdown={on_pointer_down}
                onpointerup={on_pointer_up}
            >
                <img src={current.src.clone()} alt={current.alt.clone()} class="w-full h-auto select-none" />
            </div>
            if let Some(caption) = &current.caption {
                <p class="mt-3 text-sm text-slate-500 text-center">{caption.clone()}</p>
            }
            <div class="mt-4 flex items-center justify-center gap-4">
                <button
                    type="button"
                    onclick={on_prev}
                    disabled={!state.can_prev()}
                    aria-label="Previous slide"
                    class="p-2 rounded-full text-slate-600 hover:bg-slate-100 disabled:opacity-40"
                >
                    <span class="material-symbols-rounded">{"chevron_left"}</span>
                </button>
                <div class="flex gap-2">{for dots}</div>
                <button
                    type="button"
                    onclick={on_next}
                    disabled={!state.can_next()}
                    aria-label="Next slide"
                    class="p-2 rounded-full text-slate-600 hover:bg-slate-100 disabled:opacity-40"
                >
                    <span class="material-symbols-rounded">{"chevron_right"}</span>
                </button>
            </div>
            if state.is_viewer_open() {
                <Modal
                    on_close={on_close.clone()}
                    label={current.alt.clone()}
                    panel_class="relative w-full max-w-6xl"
                >
                    <button
                        type="button"
                        onclick={on_close.reform(|_: MouseEvent| ())}
                        aria-label="Close"
                        class="absolute -top-10 right-0 text-white hover:text-slate-200"
                    >
                        <span class="material-symbols-rounded">{"close"}</span>
                    </button>
                    <img src={current.src.clone()} alt={current.alt.clone()} class="w-full h-auto rounded-xl" />
                    if let Some(caption) = &current.caption {
                        <p class="mt-3 text-sm text-white text-center">{caption.clone()}</p>
                    }
                </Modal>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_is_clamped_to_the_slides() {
        let mut state = CarouselState::new(3);
        assert!(!state.can_prev());
        state.prev();
        assert_eq!(state.active(), 0);

        state.go_to(10);
        assert_eq!(state.active(), 2);
        assert!(!state.can_next());
        state.next();
        assert_eq!(state.active(), 2);
        state.prev();
        assert_eq!(state.active(), 1);
        assert!(state.can_prev() && state.can_next());
    }

    #[test]
    fn empty_carousel_never_opens_the_viewer() {
        let mut state = CarouselState::new(0);
        state.go_to(3);
        assert_eq!(state.active(), 0);
        state.open_viewer();
        assert!(!state.is_viewer_open());
    }

    #[test]
    fn viewer_keeps_the_active_slide() {
        let mut state = CarouselState::new(4);
        state.go_to(2);
        state.open_viewer();
        assert!(state.is_viewer_open());
        state.close_viewer();
        assert_eq!(state.active(), 2);
    }

    #[test]
    fn small_movements_are_taps() {
        assert!(is_tap((10.0, 10.0), (15.0, 14.0)));
        assert!(!is_tap((10.0, 10.0), (30.0, 10.0)));
    }
}
