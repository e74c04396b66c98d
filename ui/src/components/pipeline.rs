//! Scroll-driven walkthrough of the product pipeline.
//!
//! Each step fades in the first time it crosses the middle band of the
//! viewport, and a sticky ring shows the furthest step currently in that
//! band.

use std::collections::BTreeSet;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const TOTAL_STEPS: u32 = 10;

/// Only the central 30% of the viewport counts as "in view".
const MIDDLE_BAND_MARGIN: &str = "-35% 0px -35% 0px";

/// Clamped to `[0, TOTAL_STEPS]`.
pub fn clamp_step(step: u32) -> u32 {
    step.min(TOTAL_STEPS)
}

/// Share of the pipeline covered at `step`, `0.0..=100.0`.
pub fn percent(step: u32) -> f64 {
    f64::from(clamp_step(step)) / f64::from(TOTAL_STEPS) * 100.0
}

/// `stroke-dashoffset` for a ring drawn with `pathLength="100"`.
pub fn dash_offset(step: u32) -> f64 {
    100.0 - percent(step)
}

pub fn progress_label(step: u32) -> String {
    format!("Step {} of {TOTAL_STEPS}", clamp_step(step))
}

pub fn step_id(number: u32) -> String {
    format!("step-{number}")
}

/// Inverse of [`step_id`].
pub fn step_number(id: &str) -> Option<u32> {
    id.strip_prefix("step-")?.parse().ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineProgress {
    visible: BTreeSet<u32>,
    revealed: BTreeSet<u32>,
}

pub struct StepVisibility {
    pub step: u32,
    pub intersecting: bool,
}

impl PipelineProgress {
    pub fn observe(&mut self, step: u32, intersecting: bool) {
        if intersecting {
            self.visible.insert(step);
            self.revealed.insert(step);
        } else {
            self.visible.remove(&step);
        }
    }

    /// Highest step in the band, or 0 when none is.
    pub fn current_step(&self) -> u32 {
        clamp_step(self.visible.last().copied().unwrap_or(0))
    }

    /// Steps stay revealed once they have been seen.
    pub fn is_revealed(&self, step: u32) -> bool {
        self.revealed.contains(&step)
    }

    pub fn ring_visible(&self) -> bool {
        !self.visible.is_empty()
    }
}

impl Reducible for PipelineProgress {
    type Action = StepVisibility;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.observe(action.step, action.intersecting);
        if next == *self {
            return self;
        }
        tracing::trace!(step = next.current_step(), "Pipeline progress changed");
        next.into()
    }
}

#[derive(Clone, PartialEq)]
pub struct PipelineStep {
    pub title: AttrValue,
    pub body: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct PipelineProps {
    pub steps: Vec<PipelineStep>,
}

#[function_component]
pub fn Pipeline(props: &PipelineProps) -> Html {
    let progress = use_reducer(PipelineProgress::default);
    let container = use_node_ref();

    {
        let progress = progress.dispatcher();
        let container = container.clone();
        use_effect_with(props.steps.len(), move |_| {
            let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let step = entry
                        .target()
                        .get_attribute("data-step-id")
                        .as_deref()
                        .and_then(step_number);
                    if let Some(step) = step {
                        progress.dispatch(StepVisibility {
                            step,
                            intersecting: entry.is_intersecting(),
                        });
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array)>);

            let options = IntersectionObserverInit::new();
            options.set_root_margin(MIDDLE_BAND_MARGIN);
            options.set_threshold(&JsValue::from_f64(0.0));
            let observer =
                IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
                    .map_err(|e| tracing::warn!(error = ?e, "IntersectionObserver unavailable"))
                    .ok();

            if let (Some(observer), Some(root)) = (&observer, container.cast::<Element>()) {
                if let Ok(steps) = root.query_selector_all(".reveal") {
                    tracing::debug!(count = steps.length(), "Observing pipeline steps");
                    for i in 0..steps.length() {
                        if let Some(step) = steps.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                            observer.observe(&step);
                        }
                    }
                }
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(closure);
            }
        });
    }

    let current = progress.current_step();
    let steps = props.steps.iter().enumerate().map(|(i, step)| {
        let number = i as u32 + 1;
        html! {
            <li
                key={number}
                data-step-id={step_id(number)}
                class={classes!(
                    "reveal", "transition-all", "duration-700",
                    if progress.is_revealed(number) {
                        "reveal-visible opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-6"
                    }
                )}
            >
                <p class="text-sm font-semibold text-brand-600">{format!("Step {number}")}</p>
                <h3 class="mt-1 text-xl font-bold text-slate-900">{step.title.clone()}</h3>
                <p class="mt-2 text-slate-600">{step.body.clone()}</p>
            </li>
        }
    });

    html! {
        <div ref={container} class="relative grid md:grid-cols-[1fr_10rem] gap-10">
            <ol class="space-y-32">
                {for steps}
            </ol>
            <div
                class={classes!(
                    "hidden", "md:block", "sticky", "top-1/3", "h-40", "transition-opacity",
                    if progress.ring_visible() { "opacity-100" } else { "opacity-0" }
                )}
                aria-live="polite"
            >
                <svg viewBox="0 0 36 36" class="w-28 h-28 -rotate-90">
                    <circle cx="18" cy="18" r="16" fill="none" class="stroke-slate-200" stroke-width="3" />
                    <circle
                        cx="18" cy="18" r="16" fill="none"
                        class="stroke-brand-600 transition-all"
                        stroke-width="3"
                        pathLength="100"
                        stroke-dasharray="100"
                        stroke-dashoffset={dash_offset(current).to_string()}
                    />
                </svg>
                <p class="mt-2 text-center text-2xl font-bold text-slate-900">{current.to_string()}</p>
                <p class="text-center text-sm text-slate-500">{progress_label(current)}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_tracks_the_highest_visible_step() {
        let mut progress = PipelineProgress::default();
        assert_eq!(progress.current_step(), 0);
        assert!(!progress.ring_visible());

        progress.observe(2, true);
        progress.observe(3, true);
        assert_eq!(progress.current_step(), 3);

        progress.observe(3, false);
        assert_eq!(progress.current_step(), 2);
        assert!(progress.is_revealed(3));

        progress.observe(2, false);
        assert_eq!(progress.current_step(), 0);
        assert!(!progress.ring_visible());
    }

    #[test]
    fn steps_are_clamped_to_the_pipeline_length() {
        let mut progress = PipelineProgress::default();
        progress.observe(14, true);
        assert_eq!(progress.current_step(), TOTAL_STEPS);
        assert_eq!(progress_label(14), "Step 10 of 10");
        assert_eq!(percent(12), 100.0);
        assert_eq!(dash_offset(0), 100.0);
        assert_eq!(dash_offset(5), 50.0);
        assert_eq!(progress_label(0), "Step 0 of 10");
    }

    #[test]
    fn step_ids_round_trip() {
        assert_eq!(step_number(&step_id(7)), Some(7));
        assert_eq!(step_number("intro"), None);
        assert_eq!(step_number("step-x"), None);
    }
}
